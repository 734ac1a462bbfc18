//! Port abstraction for user persistence adapters and their errors.
//!
//! This is the storage accessor for the `users` table. Adapters return rows
//! or generated identifiers and report failures as [`UserPersistenceError`];
//! a missing row is never an error.

use async_trait::async_trait;

use crate::domain::{User, UserFields, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    ///
    /// `message` carries the storage layer's own wording so inbound adapters
    /// can pass it to clients verbatim.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection,
        /// Query or mutation was rejected during execution.
        Query,
    }
}

/// Storage accessor for user rows.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert one row built from `fields` and return the generated identifier.
    async fn create(&self, fields: &UserFields) -> Result<UserId, UserPersistenceError>;

    /// Fetch a user by identifier; `Ok(None)` when no row matches.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch every user. Callers must not rely on the order.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Apply `fields` to the matching row and return the number of rows
    /// changed. A missing row is a no-op returning `0`.
    async fn update(&self, id: UserId, fields: &UserFields)
    -> Result<usize, UserPersistenceError>;

    /// Delete the matching row and return the number of rows removed. A
    /// missing row is a no-op returning `0`.
    async fn delete(&self, id: UserId) -> Result<usize, UserPersistenceError>;
}
