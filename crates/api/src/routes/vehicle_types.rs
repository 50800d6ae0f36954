//! Route definitions for the `/vehicle-types` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::vehicle_types;
use crate::state::AppState;

/// Routes mounted at `/vehicle-types`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(vehicle_types::list))
}
