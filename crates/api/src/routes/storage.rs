//! Route definitions for the `/storage` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::storage;
use crate::state::AppState;

/// Routes mounted at `/storage`.
///
/// ```text
/// GET    /url         -> url
/// DELETE /{fileName}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/url", get(storage::url))
        .route("/{file_name}", delete(storage::delete))
}
