//! Domain ports implemented by outbound adapters.

mod macros;
mod user_repository;

pub(crate) use macros::define_port_error;

pub use user_repository::{UserPersistenceError, UserRepository};
