//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they only depend on
//! domain use-cases and stay testable without a real database.

use std::sync::Arc;

use crate::domain::UsersService;
use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: UsersService,
}

impl HttpState {
    /// Build state around a user repository.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use users_api::inbound::http::state::HttpState;
    /// use users_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
    ///
    /// # async fn demo() -> Result<(), users_api::outbound::persistence::PoolError> {
    /// let pool = DbPool::new(PoolConfig::new(":memory:")).await?;
    /// let state = HttpState::new(Arc::new(DieselUserRepository::new(pool)));
    /// # let _ = state;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            users: UsersService::new(repository),
        }
    }
}
