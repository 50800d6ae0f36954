//! Handlers for the `/sales` resource.
//!
//! Sale creation is deliberately not transactional: the sale row is
//! the source of truth, and per-item detail/stock writes are tolerated
//! failures (logged, never surfaced). See DESIGN.md before "fixing"
//! this.

use axum::extract::{Path, Query, State};
use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderName;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Datelike, TimeZone, Utc};
use serde::Deserialize;
use serde_json::json;

use bengkel_core::checkout::{compute_total, lenient_f64, SaleItemInput};
use bengkel_core::types::{DbId, Timestamp};
use bengkel_db::models::sale::{CreateSale, CreateSaleDetail};
use bengkel_db::models::stock::NewStockMovement;
use bengkel_db::repositories::{SaleDetailRepo, SaleRepo, StockMovementRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthSession;
use crate::response;
use crate::state::AppState;

/// Cache directives for the current (still-changing) month.
const CURRENT_MONTH_CACHE: &str = "public, max-age=10, stale-while-revalidate=60";

/// Cache directives for past months; historical sales are immutable.
const PAST_MONTH_CACHE: &str = "public, max-age=3600, stale-while-revalidate=86400";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /sales`, defaulting to the current month.
#[derive(Debug, Deserialize)]
pub struct MonthParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Request body for `POST /sales`.
#[derive(Debug, Deserialize)]
pub struct CreateSaleRequest {
    pub customer_name: Option<String>,
    #[serde(rename = "type")]
    pub sale_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub service_fee: f64,
    #[serde(default)]
    pub items: Vec<SaleItemInput>,
    pub receipt_url: Option<String>,
    pub payment_method: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/sales
///
/// Sales for one calendar month, newest first, with cache directives
/// scaled to how fresh the month is.
pub async fn list(
    _auth: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let year = params.year.unwrap_or_else(|| now.year());
    let month = params.month.unwrap_or_else(|| now.month());

    let (start, end) = month_window(year, month)?;
    let sales = SaleRepo::list_between(&state.pool, start, end).await?;

    let is_current_month = year == now.year() && month == now.month();
    let cache_control = if is_current_month {
        CURRENT_MONTH_CACHE
    } else {
        PAST_MONTH_CACHE
    };

    Ok((
        [
            (CACHE_CONTROL, cache_control),
            (HeaderName::from_static("cdn-cache-control"), cache_control),
        ],
        response::ok(sales),
    ))
}

/// GET /api/sales/today
pub async fn today(
    _auth: AuthSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let start = Utc::now()
        .date_naive()
        .and_time(chrono::NaiveTime::MIN)
        .and_utc();
    let end = start + chrono::Duration::days(1);

    let sales = SaleRepo::list_between(&state.pool, start, end).await?;
    Ok(response::ok(sales))
}

/// GET /api/sales/{id}/items
pub async fn items(
    _auth: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let items = SaleDetailRepo::list_for_sale(&state.pool, id).await?;
    Ok(response::ok(items))
}

/// POST /api/sales
///
/// Record a checkout. The sale row must land before any line item is
/// written; once it has, per-item detail and stock-movement failures
/// are logged and skipped without changing the reported outcome.
pub async fn create(
    auth: AuthSession,
    State(state): State<AppState>,
    Json(input): Json<CreateSaleRequest>,
) -> AppResult<impl IntoResponse> {
    let total_amount = compute_total(input.service_fee, &input.items);

    let sale_input = CreateSale {
        customer_name: input.customer_name,
        sale_type: input.sale_type,
        service_fee: input.service_fee,
        total_amount,
        receipt_url: input.receipt_url,
        operator: auth.username.clone(),
        payment_method: input.payment_method,
    };
    let sale = SaleRepo::create(&state.pool, &sale_input)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Sale insert failed");
            AppError::Internal(e.to_string())
        })?;

    for item in &input.items {
        let detail = CreateSaleDetail {
            sale_id: sale.id,
            product_id: item.product_id,
            quantity: item.quantity,
            price_at_sale: item.price,
            subtotal: item.subtotal(),
        };
        if let Err(e) = SaleDetailRepo::insert(&state.pool, &detail).await {
            tracing::error!(
                error = %e,
                sale_id = sale.id,
                product_id = item.product_id,
                "Sale detail insert failed"
            );
        }

        let movement = NewStockMovement {
            product_id: item.product_id,
            quantity_change: -item.quantity,
            movement_type: "sale".into(),
        };
        if let Err(e) = StockMovementRepo::insert(&state.pool, &movement).await {
            tracing::error!(
                error = %e,
                sale_id = sale.id,
                product_id = item.product_id,
                "Stock movement insert failed"
            );
        }
    }

    Ok(response::created(
        json!({ "id": sale.id, "total_amount": total_amount }),
        "Sale created successfully",
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Half-open UTC window `[first of month, first of next month)`.
fn month_window(year: i32, month: u32) -> Result<(Timestamp, Timestamp), AppError> {
    let invalid = || AppError::Validation("Invalid year or month".into());

    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    let start = Utc
        .with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or_else(invalid)?;
    let end = Utc
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .single()
        .ok_or_else(invalid)?;

    Ok((start, end))
}
