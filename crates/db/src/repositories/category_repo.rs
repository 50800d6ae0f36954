//! Repository for the `category` table.

use sqlx::PgPool;

use crate::models::category::Category;

/// Read access to product categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM category ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }
}
