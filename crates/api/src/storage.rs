//! HTTP client for the object storage service.
//!
//! The storage service exposes per-bucket upload, public-URL, and
//! delete operations under a single API root. Writes authenticate
//! with a service key; public URLs are unauthenticated.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::config::StorageConfig;

/// Errors from the object storage service.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The request never completed (connection, TLS, timeout).
    #[error("storage request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("storage service returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },
}

/// Client for one storage service instance.
pub struct StorageClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl StorageClient {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
        }
    }

    /// Upload an object, replacing any existing object at the same path.
    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        let url = format!("{}/object/{}/{}", self.base_url, bucket, path);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.service_key)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Public URL for an object. Purely string construction; does not
    /// verify that the object exists.
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, bucket, path)
    }

    /// The public API root, as handed to clients via `GET /config`.
    pub fn public_base_url(&self) -> String {
        format!("{}/object/public", self.base_url)
    }

    /// Delete an object from a bucket.
    pub async fn delete(&self, bucket: &str, path: &str) -> Result<(), StorageError> {
        let url = format!("{}/object/{}/{}", self.base_url, bucket, path);
        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.service_key)
            .send()
            .await?;
        Self::check_status(response).await
    }

    async fn check_status(response: reqwest::Response) -> Result<(), StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(StorageError::Upstream { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> StorageClient {
        StorageClient::new(&StorageConfig {
            base_url: "https://storage.example.com/storage/v1/".to_string(),
            service_key: "key".to_string(),
            product_image_bucket: "productimage_bucket".to_string(),
            receipt_bucket: "receipts".to_string(),
            items_bucket: "items".to_string(),
        })
    }

    #[test]
    fn test_public_url_shape() {
        let client = test_client();
        assert_eq!(
            client.public_url("productimage_bucket", "123.webp"),
            "https://storage.example.com/storage/v1/object/public/productimage_bucket/123.webp"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = test_client();
        assert_eq!(
            client.public_base_url(),
            "https://storage.example.com/storage/v1/object/public"
        );
    }
}
