//! User entity model.
//!
//! Users are provisioned out-of-band (seed data or an admin tool);
//! this service only reads them during login.

use sqlx::FromRow;
use bengkel_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Carries the password digest -- never serialize this to API
/// responses. Handlers pick the public fields explicitly.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub username: String,
    pub fullname: String,
    pub role_id: DbId,
    /// Unsalted SHA-256 hex digest of the password.
    pub password: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a user (test fixtures and seeding).
pub struct CreateUser {
    pub username: String,
    pub fullname: String,
    pub role_id: DbId,
    /// Already-hashed digest, not a plaintext password.
    pub password: String,
}
