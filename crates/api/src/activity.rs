//! Best-effort activity logging.

use sqlx::PgPool;

use bengkel_db::models::activity::NewActivityLog;
use bengkel_db::repositories::ActivityLogRepo;

/// Record a mutating action in the audit trail.
///
/// Always best-effort: a failed insert is logged and swallowed, never
/// surfaced to the caller. Call only after the primary operation has
/// succeeded.
pub async fn log_activity(pool: &PgPool, username: &str, action: &str, description: &str) {
    let entry = NewActivityLog {
        username: username.to_string(),
        action: action.to_string(),
        description: description.to_string(),
    };
    if let Err(e) = ActivityLogRepo::insert(pool, &entry).await {
        tracing::warn!(error = %e, action, "Failed to record activity log");
    }
}
