//! Diesel table definitions for the SQLite schema.
//!
//! Regenerate with `diesel print-schema` when a migration changes the table.
//! The text columns are declared nullable: fresh databases create them
//! `NOT NULL`, but an adopted pre-existing table may hold NULLs.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Auto-incremented primary key.
        id -> BigInt,
        full_name -> Nullable<Text>,
        email -> Nullable<Text>,
    }
}
