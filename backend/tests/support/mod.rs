//! Shared helpers for integration tests.

use users_api::outbound::persistence::{DbPool, PoolConfig};

/// Fresh, migrated in-memory database.
///
/// The pool holds a single connection that is never recycled, so the
/// database lives exactly as long as the returned pool.
pub async fn memory_pool() -> DbPool {
    DbPool::new(PoolConfig::new(":memory:"))
        .await
        .expect("in-memory SQLite pool builds")
}
