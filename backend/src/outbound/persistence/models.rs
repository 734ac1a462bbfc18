//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{User, UserFields, UserId};

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i64,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::from_columns(UserId::new(row.id), row.full_name, row.email)
    }
}

/// Column values for inserts and partial updates.
///
/// A `None` field is left out of the statement, never written as NULL: on
/// insert the column falls back to its default (a NOT NULL column without one
/// is rejected by SQLite), and on update the column keeps its current value.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserFieldsRow<'a> {
    pub full_name: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl<'a> From<&'a UserFields> for UserFieldsRow<'a> {
    fn from(fields: &'a UserFields) -> Self {
        Self {
            full_name: fields.full_name.as_deref(),
            email: fields.email.as_deref(),
        }
    }
}
