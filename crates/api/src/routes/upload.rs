//! Route definitions for the `/upload` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST /product-image  -> product_image (multipart)
/// POST /receipt        -> receipt (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/product-image", post(upload::product_image))
        .route("/receipt", post(upload::receipt))
}
