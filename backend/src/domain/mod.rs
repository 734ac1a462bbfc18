//! Domain primitives, ports, and use-cases.
//!
//! Purpose: define the user entity and the transport-agnostic error type used
//! by the HTTP and persistence adapters, plus the storage port those adapters
//! implement.
//!
//! Public surface:
//! - Error / ErrorCode — client-facing error payload and stable code.
//! - TraceId — request-scoped correlation identifier.
//! - User / UserId / UserFields — the `users` row, its key, and column values.
//! - UsersService — CRUD use-cases over a [`ports::UserRepository`].

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod users_service;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserFields, UserId};
pub use self::users_service::{NO_FIELDS_TO_UPDATE, USER_NOT_FOUND_MESSAGE, UsersService};
