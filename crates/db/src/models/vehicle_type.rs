//! Vehicle type model.

use serde::Serialize;
use sqlx::FromRow;
use bengkel_core::types::DbId;

/// A row from the `vehicle_type` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VehicleType {
    pub id: DbId,
    pub name: String,
}
