//! Server entry-point: parses settings, opens the database and serves the API.

use actix_web::web;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_api::inbound::http::health::HealthState;
use users_api::outbound::persistence::DbPool;
use users_api::server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::parse();
    let pool_config = settings.pool_config();
    info!(
        database_url = pool_config.database_url(),
        max_connections = pool_config.max_size(),
        "opening database"
    );
    let pool = DbPool::new(pool_config).await.map_err(|e| {
        error!(error = %e, "database pool creation failed");
        std::io::Error::other(e)
    })?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(settings.bind_addr(), pool),
    )?;
    let result = server.await;
    health_state.mark_unhealthy();
    info!("server stopped");
    result
}
