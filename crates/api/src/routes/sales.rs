//! Route definitions for the `/sales` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sales;
use crate::state::AppState;

/// Routes mounted at `/sales`.
///
/// ```text
/// GET  /            -> list (month-scoped, cached)
/// POST /            -> create
/// GET  /today       -> today
/// GET  /{id}/items  -> items
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sales::list).post(sales::create))
        .route("/today", get(sales::today))
        .route("/{id}/items", get(sales::items))
}
