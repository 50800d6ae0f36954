//! Handler for the `/categories` resource.

use axum::extract::State;
use axum::response::IntoResponse;

use bengkel_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthSession;
use crate::response;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(
    _auth: AuthSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(response::ok(categories))
}
