//! Handlers for the `/upload` resource.
//!
//! Declared content types are validated before any storage call, so a
//! rejected upload never touches the object store.

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthSession;
use crate::response;
use crate::state::AppState;

/// Content types accepted for product images.
const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// A file pulled out of a multipart request.
struct FileUpload {
    content_type: String,
    bytes: Vec<u8>,
}

/// POST /api/upload/product-image
///
/// Product images are stored under a timestamped `.webp` name in the
/// product image bucket.
pub async fn product_image(
    _auth: AuthSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let file = read_file_field(multipart).await?;
    if !is_allowed_image_type(&file.content_type) {
        return Err(AppError::Validation(
            "Invalid file type. Allowed: jpeg, png, webp".into(),
        ));
    }

    let file_name = format!("{}.webp", Utc::now().timestamp_millis());
    let bucket = &state.config.storage.product_image_bucket;

    state
        .storage
        .upload(bucket, &file_name, "image/webp", file.bytes)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to upload image: {e}")))?;

    let url = state.storage.public_url(bucket, &file_name);
    Ok(response::ok_message(
        json!({ "file_name": file_name, "url": url }),
        "Image uploaded successfully",
    ))
}

/// POST /api/upload/receipt
///
/// Receipts must be PDFs; stored as `receipt_<millis>.pdf`.
pub async fn receipt(
    _auth: AuthSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let file = read_file_field(multipart).await?;
    if file.content_type != "application/pdf" {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF allowed".into(),
        ));
    }

    let file_name = format!("receipt_{}.pdf", Utc::now().timestamp_millis());
    let bucket = &state.config.storage.receipt_bucket;

    state
        .storage
        .upload(bucket, &file_name, "application/pdf", file.bytes)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to upload receipt: {e}")))?;

    let url = state.storage.public_url(bucket, &file_name);
    Ok(response::ok_message(
        json!({ "file_name": file_name, "url": url }),
        "Receipt uploaded successfully",
    ))
}

/// Pull the `file` field out of a multipart request.
async fn read_file_field(mut multipart: Multipart) -> Result<FileUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::Validation("Invalid multipart payload".into()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| AppError::Validation("Invalid multipart payload".into()))?
            .to_vec();
        return Ok(FileUpload {
            content_type,
            bytes,
        });
    }
    Err(AppError::Validation("No file provided".into()))
}

/// Whether a declared content type is acceptable for a product image.
fn is_allowed_image_type(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_the_three_image_types() {
        assert!(is_allowed_image_type("image/jpeg"));
        assert!(is_allowed_image_type("image/png"));
        assert!(is_allowed_image_type("image/webp"));
    }

    #[test]
    fn test_rejects_everything_else() {
        assert!(!is_allowed_image_type("image/gif"));
        assert!(!is_allowed_image_type("application/pdf"));
        assert!(!is_allowed_image_type(""));
        assert!(!is_allowed_image_type("IMAGE/JPEG"));
    }
}
