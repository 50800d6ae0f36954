//! User session model and DTOs.

use sqlx::FromRow;
use bengkel_core::types::{DbId, Timestamp};

/// A session row from the `user_sessions` table.
///
/// Sessions are never physically deleted: logout and lazy expiry both
/// flip `is_active` and stamp `invalidated_at`.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub username: String,
    pub session_token: String,
    pub login_time: Timestamp,
    pub expires_at: Timestamp,
    pub is_active: bool,
    pub last_activity: Option<Timestamp>,
    pub invalidated_at: Option<Timestamp>,
    pub device_info: Option<String>,
}

/// DTO for creating a new session at login.
pub struct CreateSession {
    pub username: String,
    pub session_token: String,
    pub expires_at: Timestamp,
    /// Truncated User-Agent string, max 255 chars.
    pub device_info: String,
}
