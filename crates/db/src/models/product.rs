//! Product models and DTOs.
//!
//! Products are always read through `get_products_with_stock`, which
//! derives the `stock` column from the movement ledger; there is no
//! stored stock counter to drift.

use serde::Serialize;
use sqlx::FromRow;
use bengkel_core::types::{DbId, Timestamp};

/// A product row as returned by `get_products_with_stock()`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductWithStock {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub category_id: DbId,
    pub vehicle_type_id: DbId,
    pub image_url: Option<String>,
    /// Running sum of stock movements.
    pub stock: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated input for `create_product_with_initial_stock`.
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category_id: DbId,
    pub vehicle_type_id: DbId,
    pub image_url: Option<String>,
    pub stock: f64,
}

/// Partial update passed through to `update_product`. `None` fields
/// keep their current value; `image_url: None` clears the image.
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<DbId>,
    pub vehicle_type_id: Option<DbId>,
    pub image_url: Option<String>,
}
