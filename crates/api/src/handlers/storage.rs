//! Handlers for the `/storage` resource: public URL resolution and
//! file deletion.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;

use crate::activity::log_activity;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthSession;
use crate::response;
use crate::state::AppState;

/// Query parameters for `GET /storage/url`.
#[derive(Debug, Deserialize)]
pub struct UrlParams {
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    pub bucket: Option<String>,
}

/// Query parameters for `DELETE /storage/{fileName}`.
#[derive(Debug, Deserialize)]
pub struct BucketParam {
    pub bucket: Option<String>,
}

/// GET /api/storage/url
///
/// Resolve the public URL for a stored file. Does not verify the
/// file exists.
pub async fn url(
    _auth: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<UrlParams>,
) -> AppResult<impl IntoResponse> {
    let file_name = params
        .file_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::Validation("fileName is required".into()))?;
    let bucket = params
        .bucket
        .unwrap_or_else(|| state.config.storage.product_image_bucket.clone());

    let url = state.storage.public_url(&bucket, &file_name);
    Ok(response::ok(json!({
        "url": url,
        "fileName": file_name,
        "bucket": bucket,
    })))
}

/// DELETE /api/storage/{fileName}
pub async fn delete(
    auth: AuthSession,
    State(state): State<AppState>,
    Path(file_name): Path<String>,
    Query(params): Query<BucketParam>,
) -> AppResult<impl IntoResponse> {
    let bucket = params
        .bucket
        .unwrap_or_else(|| state.config.storage.product_image_bucket.clone());

    state
        .storage
        .delete(&bucket, &file_name)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, bucket = %bucket, file_name = %file_name, "Storage delete failed");
            AppError::Internal("Failed to delete file".into())
        })?;

    log_activity(
        &state.pool,
        &auth.username,
        "DELETE_FILE",
        &format!("Deleted file: {file_name} from {bucket}"),
    )
    .await;

    Ok(response::ok_message(
        serde_json::Value::Null,
        "File deleted successfully",
    ))
}
