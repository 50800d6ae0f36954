use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::StorageClient;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Built once in `main` and cloned into each handler -- there is no
/// module-level client singleton. Cheaply cloneable (inner data is
/// behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bengkel_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object storage client.
    pub storage: Arc<StorageClient>,
}
