//! Stock movement DTO.

use bengkel_core::types::DbId;

/// DTO for appending to the `stock_movements` ledger.
///
/// `quantity_change` is signed: sales append negative movements,
/// manual restocks positive ones.
pub struct NewStockMovement {
    pub product_id: DbId,
    pub quantity_change: f64,
    /// Movement kind: `"sale"`, `"manual_add"`, or `"initial"`.
    pub movement_type: String,
}
