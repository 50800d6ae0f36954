//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "username, fullname, role_id, password, created_at";

/// Read access to users. Accounts are provisioned out-of-band.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user row (seeding and test fixtures only).
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, fullname, role_id, password)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.fullname)
            .bind(input.role_id)
            .bind(&input.password)
            .fetch_one(pool)
            .await
    }

    /// Find a user whose username and password digest both match.
    ///
    /// The digest comparison is exact, so callers must hash before
    /// calling; a miss does not reveal whether the username exists.
    pub async fn find_by_credentials(
        pool: &PgPool,
        username: &str,
        password_digest: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1 AND password = $2");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .bind(password_digest)
            .fetch_optional(pool)
            .await
    }
}
