//! Async connection pool for Diesel SQLite connections.
//!
//! SQLite is driven through `diesel-async`'s `SyncConnectionWrapper`, which
//! runs each query on a blocking thread, and pooled with `bb8`. Every new
//! connection applies pending migrations before it is handed out, so a fresh
//! file or `:memory:` database is usable immediately.
//!
//! # Design
//!
//! - The default pool holds exactly one connection. SQLite serialises writers
//!   anyway, and a single connection keeps a `:memory:` database alive for the
//!   lifetime of the pool.
//! - Idle and lifetime reaping are disabled so that single connection is never
//!   recycled.
//! - A `:memory:` pool never grows past one connection: each SQLite connection
//!   would otherwise open its own private database.
//! - All errors are mapped to `PoolError` variants.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::{Connection, ConnectionError, ConnectionResult, SqliteConnection};
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use futures_util::future::BoxFuture;
use tracing::{debug, warn};

use super::migrations::MIGRATIONS;

/// SQLite URL naming a private in-memory database.
pub const IN_MEMORY_DATABASE_URL: &str = ":memory:";

/// Async SQLite connection type handed out by [`DbPool`].
pub type DbConnection = SyncConnectionWrapper<SqliteConnection>;

/// Milliseconds SQLite waits on a locked database before failing a statement.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use users_api::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("users.sqlite3")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
///
/// // Every `:memory:` connection is a separate database.
/// assert_eq!(PoolConfig::new(":memory:").with_max_size(4).max_size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration with the given database URL.
    ///
    /// The URL is a SQLite path such as `dev.sqlite3`, or `:memory:`.
    ///
    /// Defaults:
    /// - `max_size`: 1 connection
    /// - `min_idle`: 1 connection
    /// - `connection_timeout`: 30 seconds
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 1,
            min_idle: Some(1),
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of connections in the pool.
    ///
    /// Values below one are raised to one, and `min_idle` is clamped so it
    /// never exceeds the new maximum. An in-memory database is pinned to one
    /// connection.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        let ceiling = if self.is_in_memory() { 1 } else { u32::MAX };
        if max_size > ceiling {
            warn!(
                requested = max_size,
                "in-memory database limited to a single pooled connection"
            );
        }
        self.max_size = max_size.clamp(1, ceiling);
        self.min_idle = self.min_idle.map(|idle| idle.min(self.max_size));
        self
    }

    /// Set the minimum number of idle connections to maintain.
    #[must_use]
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle.map(|idle| idle.min(self.max_size));
        self
    }

    /// Set the connection checkout timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Get the database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Get the maximum pool size.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// True when the URL names a private in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_url == IN_MEMORY_DATABASE_URL
    }
}

/// Open a SQLite connection, tune it, and apply pending migrations.
///
/// `SqliteConnection` is blocking, so the work runs on tokio's blocking pool.
fn establish_connection(database_url: &str) -> BoxFuture<'_, ConnectionResult<DbConnection>> {
    let database_url = database_url.to_owned();
    Box::pin(async move {
        tokio::task::spawn_blocking(move || {
            let mut conn = SqliteConnection::establish(&database_url)?;
            conn.batch_execute(&format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};"))
                .map_err(|err| ConnectionError::BadConnection(err.to_string()))?;
            let applied = conn
                .run_pending_migrations(MIGRATIONS)
                .map_err(|err| ConnectionError::BadConnection(err.to_string()))?;
            debug!(
                database_url = %database_url,
                applied = applied.len(),
                "sqlite connection established"
            );
            Ok(SyncConnectionWrapper::new(conn))
        })
        .await
        .map_err(|err| ConnectionError::BadConnection(err.to_string()))?
    })
}

/// Async connection pool for SQLite via Diesel.
///
/// # Example
///
/// ```ignore
/// let pool = DbPool::new(PoolConfig::new(":memory:")).await?;
/// let mut conn = pool.get().await?;
/// // Use conn for Diesel operations...
/// ```
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<DbConnection>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// The pool opens its idle connections eagerly, so an unreachable path or
    /// a failing migration surfaces here rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the pool cannot be constructed.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let mut manager_config = ManagerConfig::<DbConnection>::default();
        manager_config.custom_setup = Box::new(establish_connection);
        let manager =
            AsyncDieselConnectionManager::<DbConnection>::new_with_config(
                &config.database_url,
                manager_config,
            );

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, DbConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
