//! Repository for the `vehicle_type` table.

use sqlx::PgPool;

use crate::models::vehicle_type::VehicleType;

/// Read access to vehicle types.
pub struct VehicleTypeRepo;

impl VehicleTypeRepo {
    /// All vehicle types ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<VehicleType>, sqlx::Error> {
        sqlx::query_as::<_, VehicleType>("SELECT id, name FROM vehicle_type ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }
}
