//! Users API handlers.
//!
//! ```text
//! POST   /users        {"full_name":"Ada Lovelace","email":"ada@example.com"}
//! GET    /users
//! GET    /users/{id}
//! PUT    /users/{id}   {"email":"ada@analytical.engine"}
//! DELETE /users/{id}
//! ```
//!
//! An `{id}` that is not an integer behaves like an id with no row: `GET`
//! answers 404 and writes succeed without touching storage.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, USER_NOT_FOUND_MESSAGE, User, UserFields, UsersService};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_user_id;

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Both columns are optional here; SQLite enforces that inserts carry them.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    #[schema(example = "Ada Lovelace")]
    pub full_name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

impl From<UserPayload> for UserFields {
    fn from(payload: UserPayload) -> Self {
        Self {
            full_name: payload.full_name,
            email: payload.email,
        }
    }
}

/// Response body for `POST /users`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CreatedUser {
    /// Identifier generated for the new row.
    pub id: i64,
}

/// Response body for successful `PUT` and `DELETE` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct Success {
    pub success: bool,
}

impl Success {
    const OK: Self = Self { success: true };
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = CreatedUser),
        (status = 400, description = "Malformed body or storage error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let fields = UserFields::from(payload.into_inner());
    let id = state.users.create(&fields).await?;
    Ok(HttpResponse::Created().json(CreatedUser { id: id.get() }))
}

/// List every user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 400, description = "Storage error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.users.list().await?))
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Storage error", body = Error),
        (status = 404, description = "No user has this id", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let Some(id) = parse_user_id(&path) else {
        return Err(Error::not_found(USER_NOT_FOUND_MESSAGE));
    };
    Ok(web::Json(state.users.get(id).await?))
}

/// Update some or all columns of a user.
///
/// An id with no matching row still answers `{"success": true}`.
#[utoipa::path(
    put,
    path = "/users/{id}",
    request_body = UserPayload,
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Update applied", body = Success),
        (status = 400, description = "Malformed input, empty body or storage error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<Success>> {
    let fields = UserFields::from(payload.into_inner());
    match parse_user_id(&path) {
        Some(id) => state.users.update(id, &fields).await?,
        None => {
            UsersService::ensure_updatable(&fields)?;
            debug!(raw_id = %path.as_str(), "update id matches no user");
        }
    }
    Ok(web::Json(Success::OK))
}

/// Delete a user.
///
/// An id with no matching row still answers `{"success": true}`.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Delete applied", body = Success),
        (status = 400, description = "Storage error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Success>> {
    match parse_user_id(&path) {
        Some(id) => state.users.delete(id).await?,
        None => debug!(raw_id = %path.as_str(), "delete id matches no user"),
    }
    Ok(web::Json(Success::OK))
}
