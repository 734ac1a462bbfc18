//! Test helpers for inbound HTTP components.

use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserFields, UserId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::inbound::http::validation::json_config;
use crate::middleware::Trace;

/// Canned repository for handler tests.
///
/// Serves a single optional user, records the last field set it was given,
/// and fails every call with a `Query` error when `failure` is set.
#[derive(Default)]
pub struct StubUserRepository {
    pub user: Option<User>,
    pub failure: Option<String>,
    pub last_fields: Mutex<Option<UserFields>>,
}

impl StubUserRepository {
    pub fn with_user(user: User) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_owned()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), UserPersistenceError> {
        self.failure
            .as_deref()
            .map_or(Ok(()), |message| Err(UserPersistenceError::query(message)))
    }

    fn record(&self, fields: &UserFields) {
        *self.last_fields.lock().expect("fields lock") = Some(fields.clone());
    }

    fn matches(&self, id: UserId) -> usize {
        usize::from(self.user.as_ref().is_some_and(|user| user.id() == id))
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn create(&self, fields: &UserFields) -> Result<UserId, UserPersistenceError> {
        self.check()?;
        self.record(fields);
        Ok(UserId::new(7))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        self.check()?;
        Ok(self.user.clone().filter(|user| user.id() == id))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.check()?;
        Ok(self.user.clone().into_iter().collect())
    }

    async fn update(&self, id: UserId, fields: &UserFields) -> Result<usize, UserPersistenceError> {
        self.check()?;
        self.record(fields);
        Ok(self.matches(id))
    }

    async fn delete(&self, id: UserId) -> Result<usize, UserPersistenceError> {
        self.check()?;
        Ok(self.matches(id))
    }
}

/// App exposing the user routes over `repository`, wrapped in the trace
/// middleware and the JSON error config.
pub fn users_app(
    repository: Arc<dyn UserRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(repository)))
        .app_data(json_config())
        .wrap(Trace)
        .service(create_user)
        .service(list_users)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
}
