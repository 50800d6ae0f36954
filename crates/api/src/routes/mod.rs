//! Route tree.
//!
//! Route hierarchy:
//!
//! ```text
//! /health                      liveness (public, no envelope)
//!
//! /api/auth/login              login (public)
//! /api/auth/logout             logout
//! /api/auth/validate           session validation
//!
//! /api/products                list, create
//! /api/products/stock          manual stock adjustment (POST)
//! /api/products/{id}           get, update, delete
//!
//! /api/sales                   month listing, create
//! /api/sales/today             today's sales
//! /api/sales/{id}/items        line items for a sale
//!
//! /api/categories              list
//! /api/vehicle-types           list
//!
//! /api/dashboard/low-stock     products at or below threshold
//! /api/dashboard/monthly       monthly revenue
//! /api/dashboard/weekly        last-7-days revenue chart
//!
//! /api/upload/product-image    multipart image upload
//! /api/upload/receipt          multipart PDF upload
//!
//! /api/storage/url             public URL for a file
//! /api/storage/{fileName}      delete a file (DELETE)
//!
//! /api/config                  storage config for clients (public)
//! ```
//!
//! Everything under `/api` except `/api/auth/login` and `/api/config`
//! requires a valid session token; handlers enforce this via the
//! [`crate::middleware::auth::AuthSession`] extractor.

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod health;
pub mod products;
pub mod sales;
pub mod storage;
pub mod upload;
pub mod vehicle_types;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/products", products::router())
        .nest("/sales", sales::router())
        .nest("/categories", categories::router())
        .nest("/vehicle-types", vehicle_types::router())
        .nest("/dashboard", dashboard::router())
        .nest("/upload", upload::router())
        .nest("/storage", storage::router())
        .route("/config", get(handlers::client_config::get_config))
}
