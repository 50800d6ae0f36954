//! Repository for the `stock_movements` ledger.

use sqlx::PgPool;

use crate::models::stock::NewStockMovement;

/// Append-only access to the stock ledger. There is no update or
/// delete: corrections are compensating movements.
pub struct StockMovementRepo;

impl StockMovementRepo {
    /// Append a movement to the ledger.
    pub async fn insert(pool: &PgPool, input: &NewStockMovement) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO stock_movements (product_id, quantity_change, type)
             VALUES ($1, $2, $3)",
        )
        .bind(input.product_id)
        .bind(input.quantity_change)
        .bind(&input.movement_type)
        .execute(pool)
        .await?;
        Ok(())
    }
}
