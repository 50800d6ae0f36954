//! Handlers for the `/products` resource.
//!
//! All reads go through `get_products_with_stock`; the `stock` field
//! in responses is always the ledger sum, never a stored counter.

use axum::extract::{Path, Query, State};
use axum::Json;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;

use bengkel_core::types::DbId;
use bengkel_db::models::product::{NewProduct, UpdateProduct};
use bengkel_db::models::stock::NewStockMovement;
use bengkel_db::repositories::{ProductRepo, StockMovementRepo};

use crate::activity::log_activity;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthSession;
use crate::response;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /products`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request body for `POST /products`. Fields are optional so missing
/// ones produce a 400 with a contract message rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<DbId>,
    pub vehicle_type_id: Option<DbId>,
    pub image_url: Option<String>,
    pub stock: Option<f64>,
}

/// Request body for `PUT /products/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<DbId>,
    pub vehicle_type_id: Option<DbId>,
    pub image_url: Option<String>,
}

/// Request body for `POST /products/stock`.
#[derive(Debug, Deserialize)]
pub struct AddStockRequest {
    pub product_id: Option<DbId>,
    pub quantity: Option<f64>,
    #[serde(rename = "type")]
    pub movement_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/products
pub async fn list(
    _auth: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(10);
    let offset = params.offset.unwrap_or(0);
    let products = ProductRepo::list_with_stock(&state.pool, limit, offset).await?;
    Ok(response::ok(products))
}

/// POST /api/products
///
/// Creates the product and its opening stock movement in one call.
pub async fn create(
    auth: AuthSession,
    State(state): State<AppState>,
    Json(input): Json<CreateProductRequest>,
) -> AppResult<impl IntoResponse> {
    let (name, price, category_id, vehicle_type_id) = match (
        input.name,
        input.price,
        input.category_id,
        input.vehicle_type_id,
    ) {
        (Some(name), Some(price), Some(category_id), Some(vehicle_type_id))
            if !name.is_empty() =>
        {
            (name, price, category_id, vehicle_type_id)
        }
        _ => {
            return Err(AppError::Validation(
                "Name, price, category_id, and vehicle_type_id are required".into(),
            ));
        }
    };

    let new_product = NewProduct {
        name: name.clone(),
        price,
        category_id,
        vehicle_type_id,
        image_url: input.image_url,
        stock: input.stock.unwrap_or(0.0),
    };
    let id = ProductRepo::create_with_initial_stock(&state.pool, &new_product)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    log_activity(
        &state.pool,
        &auth.username,
        "CREATE_PRODUCT",
        &format!("Created product: {name}"),
    )
    .await;

    Ok(response::created(
        json!({ "id": id }),
        "Product created successfully",
    ))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    _auth: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_with_stock(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
    Ok(response::ok(product))
}

/// PUT /api/products/{id}
pub async fn update(
    auth: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProductRequest>,
) -> AppResult<impl IntoResponse> {
    let changes = UpdateProduct {
        name: input.name,
        price: input.price,
        category_id: input.category_id,
        vehicle_type_id: input.vehicle_type_id,
        image_url: input.image_url,
    };
    ProductRepo::update(&state.pool, id, &changes)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    log_activity(
        &state.pool,
        &auth.username,
        "UPDATE_PRODUCT",
        &format!("Updated product ID: {id}"),
    )
    .await;

    Ok(response::ok_message(
        serde_json::Value::Null,
        "Product updated successfully",
    ))
}

/// DELETE /api/products/{id}
pub async fn delete(
    auth: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ProductRepo::delete(&state.pool, id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    log_activity(
        &state.pool,
        &auth.username,
        "DELETE_PRODUCT",
        &format!("Deleted product ID: {id}"),
    )
    .await;

    Ok(response::ok_message(
        serde_json::Value::Null,
        "Product deleted successfully",
    ))
}

/// POST /api/products/stock
///
/// Manual stock adjustment: append a ledger movement, then bump the
/// product's `updated_at` best-effort.
pub async fn add_stock(
    auth: AuthSession,
    State(state): State<AppState>,
    Json(input): Json<AddStockRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(product_id), Some(quantity)) = (input.product_id, input.quantity) else {
        return Err(AppError::Validation(
            "product_id and quantity are required".into(),
        ));
    };

    let movement = NewStockMovement {
        product_id,
        quantity_change: quantity,
        movement_type: input.movement_type.unwrap_or_else(|| "manual_add".into()),
    };
    StockMovementRepo::insert(&state.pool, &movement)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, product_id, "Stock movement insert failed");
            AppError::Internal("Failed to add stock".into())
        })?;

    if let Err(e) = ProductRepo::touch_updated_at(&state.pool, product_id).await {
        tracing::warn!(error = %e, product_id, "Failed to touch product timestamp");
    }

    log_activity(
        &state.pool,
        &auth.username,
        "ADD_STOCK",
        &format!("Added {quantity} stock to product ID: {product_id}"),
    )
    .await;

    Ok(response::ok_message(
        serde_json::Value::Null,
        "Stock added successfully",
    ))
}
