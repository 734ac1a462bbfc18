//! Embedded schema migrations applied to every new SQLite connection.

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

/// Migrations compiled in from `backend/migrations`.
pub(crate) const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");
