//! Route definitions for the `/dashboard` widgets.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /low-stock  -> low_stock
/// GET /monthly    -> monthly
/// GET /weekly     -> weekly
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/low-stock", get(dashboard::low_stock))
        .route("/monthly", get(dashboard::monthly))
        .route("/weekly", get(dashboard::weekly))
}
