//! Handler for `GET /config` -- storage configuration for clients.
//!
//! Public: the cashier app fetches this before login to know where
//! product images and receipts live.

use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::json;

use crate::response;
use crate::state::AppState;

/// GET /api/config
pub async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    response::ok(json!({
        "storageBaseUrl": state.storage.public_base_url(),
        "buckets": {
            "productImage": state.config.storage.product_image_bucket,
            "items": state.config.storage.items_bucket,
        },
    }))
}
