//! Sale and sale-detail models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use bengkel_core::types::{DbId, Timestamp};

/// A sale row from the `sales` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sale {
    pub id: DbId,
    pub customer_name: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub sale_type: Option<String>,
    pub service_fee: f64,
    pub total_amount: f64,
    pub receipt_url: Option<String>,
    /// Username of the cashier who recorded the sale.
    pub operator: String,
    pub payment_method: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a sale row.
pub struct CreateSale {
    pub customer_name: Option<String>,
    pub sale_type: Option<String>,
    pub service_fee: f64,
    pub total_amount: f64,
    pub receipt_url: Option<String>,
    pub operator: String,
    pub payment_method: Option<String>,
}

/// DTO for inserting a line item under an existing sale.
pub struct CreateSaleDetail {
    pub sale_id: DbId,
    pub product_id: DbId,
    pub quantity: f64,
    pub price_at_sale: f64,
    pub subtotal: f64,
}

/// A line item joined with its product name for the items endpoint.
///
/// `product_name` falls back to "Unknown Product" when the product has
/// since been deleted (the detail row keeps a NULL reference).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SaleItem {
    pub id: DbId,
    pub sale_id: DbId,
    pub product_id: Option<DbId>,
    pub quantity: f64,
    pub price_at_sale: f64,
    pub subtotal: f64,
    pub product_name: String,
}
