//! Repository for products.
//!
//! Reads go through the `get_products_with_stock()` SQL function so
//! the stock column is always derived from the movement ledger;
//! writes go through the matching SQL functions.

use sqlx::PgPool;
use bengkel_core::types::DbId;

use crate::models::product::{NewProduct, ProductWithStock, UpdateProduct};

/// Pass-through access to the product catalog functions.
pub struct ProductRepo;

impl ProductRepo {
    /// List products with their derived stock, paginated.
    pub async fn list_with_stock(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProductWithStock>, sqlx::Error> {
        sqlx::query_as::<_, ProductWithStock>(
            "SELECT * FROM get_products_with_stock() LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Fetch a single product with its derived stock.
    pub async fn find_with_stock(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductWithStock>, sqlx::Error> {
        sqlx::query_as::<_, ProductWithStock>(
            "SELECT * FROM get_products_with_stock() WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Products at or below the stock threshold, lowest first.
    pub async fn list_low_stock(
        pool: &PgPool,
        threshold: f64,
        limit: i64,
    ) -> Result<Vec<ProductWithStock>, sqlx::Error> {
        sqlx::query_as::<_, ProductWithStock>(
            "SELECT * FROM get_products_with_stock()
             WHERE stock <= $1
             ORDER BY stock ASC
             LIMIT $2",
        )
        .bind(threshold)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Create a product and its opening stock movement in one call.
    ///
    /// Returns the new product id.
    pub async fn create_with_initial_stock(
        pool: &PgPool,
        input: &NewProduct,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT create_product_with_initial_stock($1, $2, $3, $4, $5, $6)",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.category_id)
        .bind(input.vehicle_type_id)
        .bind(&input.image_url)
        .bind(input.stock)
        .fetch_one(pool)
        .await
    }

    /// Apply a partial update via `update_product`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT update_product($1, $2, $3, $4, $5, $6)")
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.category_id)
            .bind(input.vehicle_type_id)
            .bind(&input.image_url)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a product via `delete_product`.
    ///
    /// Stock movements cascade away; sale details keep a NULL product
    /// reference so history remains readable.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT delete_product($1)")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Best-effort bump of a product's `updated_at` after a manual
    /// stock adjustment.
    pub async fn touch_updated_at(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE products SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
