//! User use-cases invoked by inbound adapters.
//!
//! `UsersService` is the only thing HTTP handlers talk to. It forwards each
//! call to the injected [`UserRepository`] and turns storage outcomes into
//! domain [`Error`]s:
//!
//! - any [`UserPersistenceError`] becomes [`Error::invalid_request`] carrying
//!   the storage message verbatim;
//! - a missing row on lookup becomes [`Error::not_found`].
//!
//! Updates and deletes that match no row succeed.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Error, User, UserFields, UserId};

/// Message returned when a lookup by identifier finds nothing.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Message returned when an update carries no columns to change.
pub const NO_FIELDS_TO_UPDATE: &str = "no fields to update";

/// User CRUD use-cases backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UsersService {
    repository: Arc<dyn UserRepository>,
}

impl UsersService {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Insert a user and return its generated identifier.
    ///
    /// # Errors
    /// Returns [`Error::invalid_request`] when storage rejects the row.
    pub async fn create(&self, fields: &UserFields) -> Result<UserId, Error> {
        let id = self
            .repository
            .create(fields)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %id, "user created");
        Ok(id)
    }

    /// Fetch a single user.
    ///
    /// # Errors
    /// Returns [`Error::not_found`] when no row matches `id`, or
    /// [`Error::invalid_request`] when storage fails.
    pub async fn get(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
    }

    /// Fetch every user.
    ///
    /// # Errors
    /// Returns [`Error::invalid_request`] when storage fails.
    pub async fn list(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(map_persistence_error)
    }

    /// Reject a field set that would change nothing.
    ///
    /// # Errors
    /// Returns [`Error::invalid_request`] with [`NO_FIELDS_TO_UPDATE`] when
    /// `fields` is empty.
    pub fn ensure_updatable(fields: &UserFields) -> Result<(), Error> {
        if fields.is_empty() {
            return Err(Error::invalid_request(NO_FIELDS_TO_UPDATE));
        }
        Ok(())
    }

    /// Apply `fields` to the user identified by `id`.
    ///
    /// # Errors
    /// Returns [`Error::invalid_request`] when `fields` is empty or storage
    /// rejects the change.
    pub async fn update(&self, id: UserId, fields: &UserFields) -> Result<(), Error> {
        Self::ensure_updatable(fields)?;
        let rows = self
            .repository
            .update(id, fields)
            .await
            .map_err(map_persistence_error)?;
        log_write_outcome("updated", id, rows);
        Ok(())
    }

    /// Delete the user identified by `id`.
    ///
    /// # Errors
    /// Returns [`Error::invalid_request`] when storage fails.
    pub async fn delete(&self, id: UserId) -> Result<(), Error> {
        let rows = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        log_write_outcome("deleted", id, rows);
        Ok(())
    }
}

fn log_write_outcome(action: &'static str, id: UserId, rows: usize) {
    if rows == 0 {
        debug!(user_id = %id, action, "no user matched; nothing changed");
    } else {
        info!(user_id = %id, action, rows, "user {action}");
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    warn!(%error, "user storage operation failed");
    match error {
        UserPersistenceError::Connection { message } | UserPersistenceError::Query { message } => {
            Error::invalid_request(message)
        }
    }
}
