//! Server construction and middleware wiring.

mod config;

pub use config::{DEFAULT_DATABASE_URL, DEFAULT_PORT, ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::inbound::http::validation::json_config;
use crate::middleware::Trace;
use crate::outbound::persistence::{DbPool, DieselUserRepository};

/// Path serving the raw OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";
/// Mount point of the Swagger UI.
pub const API_DOCS_PATH: &str = "/api-docs";

/// Shared state cloned into every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
}

impl AppDependencies {
    /// Wire the Diesel-backed repository over `pool`.
    #[must_use]
    pub fn from_pool(pool: DbPool, health_state: web::Data<HealthState>) -> Self {
        let repository = Arc::new(DieselUserRepository::new(pool));
        Self {
            health_state,
            http_state: web::Data::new(HttpState::new(repository)),
        }
    }
}

/// Build the application: user routes, health probes and API docs, all
/// behind the trace middleware.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(create_user)
        .service(list_users)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
        .service(ready)
        .service(live)
        .service(web::redirect(API_DOCS_PATH, format!("{API_DOCS_PATH}/")))
        .service(
            SwaggerUi::new(format!("{API_DOCS_PATH}/{{_:.*}}"))
                .url(OPENAPI_JSON_PATH, ApiDoc::openapi()),
        )
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let deps = AppDependencies::from_pool(db_pool, health_state);
    let readiness = deps.health_state.clone();

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, docs = %format!("http://{bind_addr}{API_DOCS_PATH}/"), "server listening");
    readiness.mark_ready();
    Ok(server)
}
