//! Handler for the `/vehicle-types` resource.

use axum::extract::State;
use axum::response::IntoResponse;

use bengkel_db::repositories::VehicleTypeRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthSession;
use crate::response;
use crate::state::AppState;

/// GET /api/vehicle-types
pub async fn list(
    _auth: AuthSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let vehicle_types = VehicleTypeRepo::list(&state.pool).await?;
    Ok(response::ok(vehicle_types))
}
