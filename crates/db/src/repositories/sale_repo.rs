//! Repositories for the `sales` and `sales_details` tables.

use sqlx::PgPool;
use bengkel_core::types::{DbId, Timestamp};

use crate::models::sale::{CreateSale, CreateSaleDetail, Sale, SaleItem};

/// Column list shared across `sales` queries.
const COLUMNS: &str = "id, customer_name, type, service_fee, total_amount, \
                        receipt_url, operator, payment_method, created_at";

/// Sale rows. Immutable after insert.
pub struct SaleRepo;

impl SaleRepo {
    /// Insert a sale row, returning it.
    ///
    /// The caller computes `total_amount` before insert; line items
    /// are written separately and do not gate this row.
    pub async fn create(pool: &PgPool, input: &CreateSale) -> Result<Sale, sqlx::Error> {
        let query = format!(
            "INSERT INTO sales (customer_name, type, service_fee, total_amount, \
                                receipt_url, operator, payment_method)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sale>(&query)
            .bind(&input.customer_name)
            .bind(&input.sale_type)
            .bind(input.service_fee)
            .bind(input.total_amount)
            .bind(&input.receipt_url)
            .bind(&input.operator)
            .bind(&input.payment_method)
            .fetch_one(pool)
            .await
    }

    /// Sales created in `[start, end)`, newest first.
    pub async fn list_between(
        pool: &PgPool,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<Sale>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sales
             WHERE created_at >= $1 AND created_at < $2
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Sale>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }
}

/// Sale line items.
pub struct SaleDetailRepo;

impl SaleDetailRepo {
    /// Insert one line item under an existing sale.
    pub async fn insert(pool: &PgPool, input: &CreateSaleDetail) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO sales_details (sale_id, product_id, quantity, price_at_sale, subtotal)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(input.sale_id)
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(input.price_at_sale)
        .bind(input.subtotal)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Line items for a sale, joined with the product name.
    pub async fn list_for_sale(
        pool: &PgPool,
        sale_id: DbId,
    ) -> Result<Vec<SaleItem>, sqlx::Error> {
        sqlx::query_as::<_, SaleItem>(
            "SELECT d.id, d.sale_id, d.product_id, d.quantity, d.price_at_sale, d.subtotal,
                    COALESCE(p.name, 'Unknown Product') AS product_name
             FROM sales_details d
             LEFT JOIN products p ON p.id = d.product_id
             WHERE d.sale_id = $1
             ORDER BY d.id",
        )
        .bind(sale_id)
        .fetch_all(pool)
        .await
    }
}
