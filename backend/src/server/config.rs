//! HTTP server configuration object and helpers.
//!
//! [`ServerSettings`] is what the operator supplies (flags or environment);
//! [`ServerConfig`] is what [`create_server`](super::create_server) consumes.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

use crate::outbound::persistence::{DbPool, PoolConfig};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;
/// Default SQLite database path.
pub const DEFAULT_DATABASE_URL: &str = "dev.sqlite3";

/// Command-line and environment settings for the server binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "users-api", about = "Serve the users CRUD API over HTTP")]
pub struct ServerSettings {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SQLite database path, or `:memory:` for a throwaway database.
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled SQLite connections.
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 1)]
    pub database_max_connections: u32,
}

impl ServerSettings {
    /// Socket address assembled from `host` and `port`.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Pool configuration for the configured database.
    ///
    /// `:memory:` always gets a single connection, whatever
    /// `database_max_connections` says.
    #[must_use]
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.database_url.clone()).with_max_size(self.database_max_connections)
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration around an open pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    const ENV_KEYS: [&str; 4] = ["HOST", "PORT", "DATABASE_URL", "DATABASE_MAX_CONNECTIONS"];

    fn parse_with_env(vars: &[(&str, &str)], args: &[&str]) -> ServerSettings {
        let overrides = ENV_KEYS.map(|key| {
            let value = vars
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned());
            (key, value)
        });
        let _guard = lock_env(overrides);
        ServerSettings::try_parse_from(std::iter::once("users-api").chain(args.iter().copied()))
            .expect("settings parse")
    }

    #[rstest]
    fn defaults_apply_without_env_or_flags() {
        let settings = parse_with_env(&[], &[]);

        assert_eq!(
            settings.bind_addr(),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
        assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(settings.pool_config().max_size(), 1);
    }

    #[rstest]
    fn environment_overrides_defaults() {
        let settings = parse_with_env(
            &[
                ("HOST", "127.0.0.1"),
                ("PORT", "8080"),
                ("DATABASE_URL", "users.sqlite3"),
                ("DATABASE_MAX_CONNECTIONS", "4"),
            ],
            &[],
        );

        assert_eq!(settings.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(settings.pool_config().database_url(), "users.sqlite3");
        assert_eq!(settings.pool_config().max_size(), 4);
    }

    #[rstest]
    #[case(&[("DATABASE_MAX_CONNECTIONS", "4")], &["--database-url", ":memory:"])]
    #[case(&[("DATABASE_URL", ":memory:")], &["--database-max-connections", "16"])]
    fn in_memory_database_keeps_a_single_connection(
        #[case] vars: &[(&str, &str)],
        #[case] args: &[&str],
    ) {
        let settings = parse_with_env(vars, args);

        assert_eq!(settings.pool_config().database_url(), ":memory:");
        assert_eq!(settings.pool_config().max_size(), 1);
    }

    #[rstest]
    fn flags_override_environment() {
        let settings = parse_with_env(
            &[("PORT", "8080")],
            &["--port", "9090", "--database-url", "other.sqlite3"],
        );

        assert_eq!(settings.port, 9090);
        assert_eq!(settings.database_url, "other.sqlite3");
    }

    #[rstest]
    fn invalid_port_is_rejected() {
        let _guard = lock_env([("PORT", Some("not-a-port".to_owned()))]);

        assert!(ServerSettings::try_parse_from(["users-api"]).is_err());
    }
}
