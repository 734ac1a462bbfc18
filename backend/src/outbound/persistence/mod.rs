//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the domain's
//! [`UserRepository`](crate::domain::ports::UserRepository) port, backed by
//! SQLite through `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: the repository only translates between Diesel rows
//!   and domain types.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Self-migrating pool**: each new connection applies the embedded
//!   migrations before use.
//!
//! # Example
//!
//! ```no_run
//! use users_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn demo() -> Result<(), users_api::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("dev.sqlite3")).await?;
//! let repo = DieselUserRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbConnection, DbPool, IN_MEMORY_DATABASE_URL, PoolConfig, PoolError};
