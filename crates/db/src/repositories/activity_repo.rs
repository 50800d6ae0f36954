//! Repository for the `activity_logs` table.

use sqlx::PgPool;

use crate::models::activity::NewActivityLog;

/// Append-only audit trail of mutating actions.
pub struct ActivityLogRepo;

impl ActivityLogRepo {
    /// Append an activity entry.
    pub async fn insert(pool: &PgPool, input: &NewActivityLog) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO activity_logs (username, action, description) VALUES ($1, $2, $3)")
            .bind(&input.username)
            .bind(&input.action)
            .bind(&input.description)
            .execute(pool)
            .await?;
        Ok(())
    }
}
