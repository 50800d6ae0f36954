//! HTTP-level integration tests for the sales endpoints: checkout
//! totals, per-item failure tolerance, listings, and cache headers.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, seed_catalog, seed_product, seed_user};
use sqlx::PgPool;

/// Seed a user, catalog, and one product; returns
/// `(app, token, product_id)`.
async fn setup(pool: &PgPool, stock: f64) -> (axum::Router, String, i64) {
    let password = seed_user(pool, "kasir").await;
    let app = common::build_test_app(pool.clone());
    let token = common::login(&app, "kasir", &password).await;
    let (category_id, vehicle_type_id) = seed_catalog(pool).await;
    let product_id = seed_product(
        &app,
        &token,
        category_id,
        vehicle_type_id,
        "Oli Mesin 1L",
        10.0,
        stock,
    )
    .await;
    (app, token, product_id)
}

/// Count stock movements of a given type for a product.
async fn movement_count(pool: &PgPool, product_id: i64, movement_type: &str) -> i64 {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM stock_movements WHERE product_id = $1 AND type = $2",
    )
    .bind(product_id)
    .bind(movement_type)
    .fetch_one(pool)
    .await
    .expect("count query should succeed")
}

// ---------------------------------------------------------------------------
// Checkout
// ---------------------------------------------------------------------------

/// total = service_fee + sum(quantity * price); line items and
/// negative stock movements land for each cart line.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_sale_totals(pool: PgPool) {
    let (app, token, product_id) = setup(&pool, 50.0).await;

    let body = serde_json::json!({
        "customer_name": "Pak Andi",
        "type": "service",
        "service_fee": 3,
        "payment_method": "cash",
        "items": [
            { "product_id": product_id, "quantity": 2, "price": 10 },
            { "product_id": product_id, "quantity": 1, "price": 5 },
        ],
    });
    let response = post_json_auth(&app, "/api/sales", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Sale created successfully");
    assert_eq!(json["data"]["total_amount"], 28.0);
    let sale_id = json["data"]["id"].as_i64().unwrap();

    let (total, operator): (f64, String) =
        sqlx::query_as("SELECT total_amount, operator FROM sales WHERE id = $1")
            .bind(sale_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(total, 28.0);
    assert_eq!(operator, "kasir", "sale must be attributed to the cashier");

    let detail_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sales_details WHERE sale_id = $1")
            .bind(sale_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(detail_count, 2);
    assert_eq!(movement_count(&pool, product_id, "sale").await, 2);

    // Derived stock reflects the ledger: 50 - 2 - 1.
    let product = get_auth(&app, &format!("/api/products/{product_id}"), &token).await;
    let product = body_json(product).await;
    assert_eq!(product["data"]["stock"], 47.0);
}

/// A sale with no items is just the service fee, and touches no stock.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_sale_with_no_items(pool: PgPool) {
    let (app, token, product_id) = setup(&pool, 5.0).await;

    let body = serde_json::json!({
        "customer_name": "Bu Sari",
        "type": "service",
        "service_fee": 7,
    });
    let response = post_json_auth(&app, "/api/sales", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["total_amount"], 7.0);

    assert_eq!(movement_count(&pool, product_id, "sale").await, 0);
    let detail_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales_details")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(detail_count, 0);
}

/// A failing line item (unknown product, so both the detail and the
/// stock-movement insert hit a foreign key) is logged and skipped;
/// the sale itself still succeeds, the remaining items still land,
/// and the reported total covers the whole cart.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_sale_tolerates_item_failures(pool: PgPool) {
    let (app, token, product_id) = setup(&pool, 50.0).await;

    let body = serde_json::json!({
        "customer_name": "Pak Andi",
        "service_fee": 3,
        "items": [
            { "product_id": 999999, "quantity": 2, "price": 10 },
            { "product_id": product_id, "quantity": 1, "price": 5 },
        ],
    });
    let response = post_json_auth(&app, "/api/sales", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["total_amount"], 28.0);
    let sale_id = json["data"]["id"].as_i64().unwrap();

    // Only the valid line landed; the sale row is untouched by the
    // bad line's failure.
    let detail_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sales_details WHERE sale_id = $1")
            .bind(sale_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(detail_count, 1);
    assert_eq!(movement_count(&pool, product_id, "sale").await, 1);
}

/// Quantities and prices arrive as numbers or numeric strings;
/// garbage coerces to zero instead of failing the request.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_sale_lenient_amounts(pool: PgPool) {
    let (app, token, product_id) = setup(&pool, 50.0).await;

    let body = serde_json::json!({
        "service_fee": "3",
        "items": [
            { "product_id": product_id, "quantity": "2", "price": "10" },
            { "product_id": product_id, "quantity": "abc", "price": 100 },
        ],
    });
    let response = post_json_auth(&app, "/api/sales", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    // 3 + 2*10 + 0*100
    assert_eq!(json["data"]["total_amount"], 23.0);
}

/// Checkout requires a session.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_sale_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::post_json(
        &app,
        "/api/sales",
        serde_json::json!({ "service_fee": 1, "items": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// The current-month listing returns the sale with short-lived cache
/// directives.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_month_listing_and_cache_headers(pool: PgPool) {
    let (app, token, product_id) = setup(&pool, 50.0).await;

    let body = serde_json::json!({
        "service_fee": 3,
        "items": [{ "product_id": product_id, "quantity": 2, "price": 10 }],
    });
    let response = post_json_auth(&app, "/api/sales", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Current month (default params): fresh data, short cache.
    let current = get_auth(&app, "/api/sales", &token).await;
    assert_eq!(current.status(), StatusCode::OK);
    assert_eq!(
        current.headers()["cache-control"],
        "public, max-age=10, stale-while-revalidate=60"
    );
    assert_eq!(
        current.headers()["cdn-cache-control"],
        "public, max-age=10, stale-while-revalidate=60"
    );
    let current = body_json(current).await;
    assert_eq!(current["data"].as_array().unwrap().len(), 1);
    assert_eq!(current["data"][0]["total_amount"], 23.0);

    // A past month: immutable history, long cache, and empty here.
    let past = get_auth(&app, "/api/sales?year=2020&month=1", &token).await;
    assert_eq!(past.status(), StatusCode::OK);
    assert_eq!(
        past.headers()["cache-control"],
        "public, max-age=3600, stale-while-revalidate=86400"
    );
    let past = body_json(past).await;
    assert_eq!(past["data"].as_array().unwrap().len(), 0);
}

/// An out-of-range month is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_month_listing_rejects_bad_month(pool: PgPool) {
    let password = seed_user(&pool, "kasir").await;
    let app = common::build_test_app(pool);
    let token = common::login(&app, "kasir", &password).await;

    let response = get_auth(&app, "/api/sales?year=2025&month=13", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid year or month");
}

/// Today's listing includes a sale created just now.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_today_listing(pool: PgPool) {
    let (app, token, product_id) = setup(&pool, 50.0).await;

    let body = serde_json::json!({
        "service_fee": 0,
        "items": [{ "product_id": product_id, "quantity": 1, "price": 10 }],
    });
    post_json_auth(&app, "/api/sales", body, &token).await;

    let response = get_auth(&app, "/api/sales/today", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

/// The items endpoint joins product names, and falls back to
/// "Unknown Product" once the product is deleted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_sale_items_join_product_names(pool: PgPool) {
    let (app, token, product_id) = setup(&pool, 50.0).await;

    let body = serde_json::json!({
        "service_fee": 0,
        "items": [{ "product_id": product_id, "quantity": 2, "price": 10 }],
    });
    let response = post_json_auth(&app, "/api/sales", body, &token).await;
    let sale_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let items = get_auth(&app, &format!("/api/sales/{sale_id}/items"), &token).await;
    assert_eq!(items.status(), StatusCode::OK);
    let items = body_json(items).await;
    assert_eq!(items["data"][0]["product_name"], "Oli Mesin 1L");
    assert_eq!(items["data"][0]["quantity"], 2.0);
    assert_eq!(items["data"][0]["subtotal"], 20.0);

    // Deleting the product nulls the reference; history survives.
    common::delete_auth(&app, &format!("/api/products/{product_id}"), &token).await;
    let items = get_auth(&app, &format!("/api/sales/{sale_id}/items"), &token).await;
    let items = body_json(items).await;
    assert_eq!(items["data"][0]["product_name"], "Unknown Product");
}
