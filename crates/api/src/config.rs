/// Server configuration loaded from environment variables.
///
/// All fields except the storage credentials have defaults suitable
/// for local development. In production, override via environment
/// variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Object storage service configuration.
    pub storage: StorageConfig,
}

/// Object storage service configuration (buckets, endpoint, key).
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage API root, e.g. `https://example.storage.host/storage/v1`.
    pub base_url: String,
    /// Service key sent as a bearer token on storage writes.
    pub service_key: String,
    /// Bucket for product images.
    pub product_image_bucket: String,
    /// Bucket for receipt PDFs.
    pub receipt_bucket: String,
    /// Bucket for miscellaneous item files (exposed to clients via
    /// `GET /config`, not written by this service).
    pub items_bucket: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// # Panics
    ///
    /// Panics on malformed numeric values and on missing storage
    /// credentials -- misconfiguration should fail at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage: StorageConfig::from_env(),
        }
    }
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default                |
    /// |--------------------------|----------|------------------------|
    /// | `STORAGE_URL`            | **yes**  | --                     |
    /// | `STORAGE_SERVICE_KEY`    | **yes**  | --                     |
    /// | `STORAGE_PRODUCT_BUCKET` | no       | `productimage_bucket`  |
    /// | `STORAGE_RECEIPT_BUCKET` | no       | `receipts`             |
    /// | `STORAGE_ITEMS_BUCKET`   | no       | `items`                |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("STORAGE_URL").expect("STORAGE_URL must be set in the environment");
        let service_key = std::env::var("STORAGE_SERVICE_KEY")
            .expect("STORAGE_SERVICE_KEY must be set in the environment");

        let product_image_bucket = std::env::var("STORAGE_PRODUCT_BUCKET")
            .unwrap_or_else(|_| "productimage_bucket".into());
        let receipt_bucket =
            std::env::var("STORAGE_RECEIPT_BUCKET").unwrap_or_else(|_| "receipts".into());
        let items_bucket = std::env::var("STORAGE_ITEMS_BUCKET").unwrap_or_else(|_| "items".into());

        Self {
            base_url,
            service_key,
            product_image_bucket,
            receipt_bucket,
            items_bucket,
        }
    }
}
