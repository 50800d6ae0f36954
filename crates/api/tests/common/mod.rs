//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) on top of the per-test database from `#[sqlx::test]`,
//! plus request/response helpers and seed fixtures.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use bengkel_api::auth::password::hash_password;
use bengkel_api::config::{ServerConfig, StorageConfig};
use bengkel_api::router::build_app_router;
use bengkel_api::state::AppState;
use bengkel_api::storage::StorageClient;
use bengkel_db::models::user::CreateUser;
use bengkel_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults.
///
/// The storage endpoint points at a closed local port: tests that
/// exercise upload/delete failure paths get a connection error, and
/// nothing ever reaches a real storage service.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage: StorageConfig {
            base_url: "http://127.0.0.1:54321/storage/v1".to_string(),
            service_key: "test-service-key".to_string(),
            product_image_bucket: "productimage_bucket".to_string(),
            receipt_bucket: "receipts".to_string(),
            items_bucket: "items".to_string(),
        },
    }
}

/// Build the full application router with all middleware layers,
/// using the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let storage = Arc::new(StorageClient::new(&config.storage));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a prepared request through the router.
pub async fn request(app: &Router, req: Request<Body>) -> Response {
    app.clone()
        .oneshot(req)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &Router, path: &str) -> Response {
    request(
        app,
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
}

pub async fn get_auth(app: &Router, path: &str, token: &str) -> Response {
    request(
        app,
        Request::builder()
            .uri(path)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
}

pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> Response {
    request(
        app,
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
}

pub async fn post_json_auth(
    app: &Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    request(
        app,
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
}

pub async fn put_json_auth(
    app: &Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    request(
        app,
        Request::builder()
            .method(Method::PUT)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
}

pub async fn delete_auth(app: &Router, path: &str, token: &str) -> Response {
    request(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(path)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user directly in the database; returns the plaintext
/// password used.
pub async fn seed_user(pool: &PgPool, username: &str) -> String {
    let password = "kasir_password_123";
    let input = CreateUser {
        username: username.to_string(),
        fullname: format!("{username} (test)"),
        role_id: 2,
        password: hash_password(password),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    password.to_string()
}

/// Log in through the API and return the session token.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]["session_token"]
        .as_str()
        .expect("login response must contain a session token")
        .to_string()
}

/// Seed a category and a vehicle type; returns `(category_id,
/// vehicle_type_id)`.
pub async fn seed_catalog(pool: &PgPool) -> (i64, i64) {
    let category_id: i64 =
        sqlx::query_scalar("INSERT INTO category (name) VALUES ('Oli') RETURNING id")
            .fetch_one(pool)
            .await
            .expect("category insert should succeed");
    let vehicle_type_id: i64 =
        sqlx::query_scalar("INSERT INTO vehicle_type (name) VALUES ('Matic') RETURNING id")
            .fetch_one(pool)
            .await
            .expect("vehicle type insert should succeed");
    (category_id, vehicle_type_id)
}

/// Create a product through the API; returns its id.
pub async fn seed_product(
    app: &Router,
    token: &str,
    category_id: i64,
    vehicle_type_id: i64,
    name: &str,
    price: f64,
    stock: f64,
) -> i64 {
    let body = serde_json::json!({
        "name": name,
        "price": price,
        "category_id": category_id,
        "vehicle_type_id": vehicle_type_id,
        "stock": stock,
    });
    let response = post_json_auth(app, "/api/products", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("product id must be set")
}
