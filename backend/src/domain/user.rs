//! User data model.
//!
//! A [`User`] is a row of the `users` table. Storage assigns the
//! [`UserId`]; `full_name` and `email` are free-form strings. Rows read from an
//! older table may lack either column, which serialises as `null`.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Auto-generated primary key of a user row.
///
/// Identifiers are assigned by storage on insert and never change afterwards.
///
/// # Examples
/// ```
/// use users_api::domain::UserId;
///
/// let id = UserId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Application user as stored in the `users` table.
///
/// Serialises with the column names as keys:
/// `{"id": 1, "full_name": "Ada Lovelace", "email": "ada@example.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Storage-assigned identifier.
    #[schema(value_type = i64, example = 1)]
    id: UserId,
    /// Full name of the user.
    #[schema(example = "Ada Lovelace")]
    full_name: Option<String>,
    /// Contact email address.
    #[schema(example = "ada@example.com")]
    email: Option<String>,
}

impl User {
    /// Build a user with both columns present.
    pub fn new(id: UserId, full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::from_columns(id, Some(full_name.into()), Some(email.into()))
    }

    /// Build a user from raw column values, any of which may be NULL.
    #[must_use]
    pub fn from_columns(id: UserId, full_name: Option<String>, email: Option<String>) -> Self {
        Self {
            id,
            full_name,
            email,
        }
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Full name of the user, if stored.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Contact email address, if stored.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Column values supplied when creating or updating a user.
///
/// Absent fields are never sent to storage: an insert omits the column (so
/// schema constraints decide whether that is acceptable) and an update leaves
/// the column untouched.
///
/// # Examples
/// ```
/// use users_api::domain::UserFields;
///
/// let fields = UserFields::new().with_full_name("New Name");
/// assert_eq!(fields.full_name.as_deref(), Some("New Name"));
/// assert!(fields.email.is_none());
/// assert!(!fields.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFields {
    /// Replacement for the `full_name` column.
    pub full_name: Option<String>,
    /// Replacement for the `email` column.
    pub email: Option<String>,
}

impl UserFields {
    /// An empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `full_name` column.
    #[must_use]
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Set the `email` column.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// True when no column is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests;
