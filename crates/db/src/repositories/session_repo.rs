//! Repository for the `user_sessions` table.

use sqlx::PgPool;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, session_token, login_time, expires_at, \
                        is_active, last_activity, invalidated_at, device_info";

/// Session persistence. Rows are flipped inactive, never deleted.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_sessions (username, session_token, expires_at, device_info)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(&input.username)
            .bind(&input.session_token)
            .bind(input.expires_at)
            .bind(&input.device_info)
            .fetch_one(pool)
            .await
    }

    /// Find a session by token, active flag still set.
    ///
    /// Expiry is NOT checked here: the caller decides what to do with
    /// an expired-but-active row (lazy invalidation).
    pub async fn find_active(
        pool: &PgPool,
        session_token: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_sessions
             WHERE session_token = $1 AND is_active = true"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(session_token)
            .fetch_optional(pool)
            .await
    }

    /// Flip a session inactive and stamp `invalidated_at`.
    ///
    /// Returns `true` if a row was updated.
    pub async fn invalidate(pool: &PgPool, session_token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE user_sessions
             SET is_active = false, invalidated_at = NOW()
             WHERE session_token = $1",
        )
        .bind(session_token)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Refresh `last_activity` for a validated session.
    pub async fn touch_activity(pool: &PgPool, session_token: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE user_sessions SET last_activity = NOW() WHERE session_token = $1")
            .bind(session_token)
            .execute(pool)
            .await?;
        Ok(())
    }
}
