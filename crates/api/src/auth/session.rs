//! Session validation with lazy expiry.
//!
//! There is no background sweeper: an expired session stays flagged
//! active until the first validation that observes it, which flips it
//! inactive before rejecting the request.

use chrono::Utc;
use sqlx::PgPool;

use bengkel_db::repositories::SessionRepo;

use crate::error::AppError;

/// Validate a bearer session token, returning the owning username.
///
/// Side effects, in order:
/// - an expired-but-active session is invalidated before the failure
///   is returned;
/// - a valid session gets its `last_activity` refreshed, best-effort
///   (a failed refresh never fails the request).
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<String, AppError> {
    let session = SessionRepo::find_active(pool, token)
        .await
        .map_err(|e| AppError::Unauthorized(e.to_string()))?
        .ok_or_else(|| AppError::Unauthorized("Invalid session token".into()))?;

    if Utc::now() > session.expires_at {
        if let Err(e) = SessionRepo::invalidate(pool, token).await {
            tracing::warn!(error = %e, "Failed to invalidate expired session");
        }
        return Err(AppError::Unauthorized("Session expired".into()));
    }

    if let Err(e) = SessionRepo::touch_activity(pool, token).await {
        tracing::warn!(error = %e, "Failed to refresh session activity");
    }

    Ok(session.username)
}
