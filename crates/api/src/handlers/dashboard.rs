//! Handlers for the `/dashboard` widgets.
//!
//! Revenue numbers come straight from the SQL aggregate functions;
//! nothing is computed here.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use bengkel_db::repositories::{DashboardRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthSession;
use crate::response;
use crate::state::AppState;

/// Query parameters for `GET /dashboard/low-stock`.
#[derive(Debug, Deserialize)]
pub struct LowStockParams {
    pub limit: Option<i64>,
    pub threshold: Option<f64>,
}

/// Query parameters for `GET /dashboard/monthly`.
#[derive(Debug, Deserialize)]
pub struct MonthlyParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// One point in the weekly revenue chart.
#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub count: f64,
}

/// GET /api/dashboard/low-stock
pub async fn low_stock(
    _auth: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<LowStockParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(5);
    let threshold = params.threshold.unwrap_or(3.0);
    let products = ProductRepo::list_low_stock(&state.pool, threshold, limit).await?;
    Ok(response::ok(products))
}

/// GET /api/dashboard/monthly
pub async fn monthly(
    _auth: AuthSession,
    State(state): State<AppState>,
    Query(params): Query<MonthlyParams>,
) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let year = params.year.unwrap_or_else(|| now.year());
    let month = params.month.unwrap_or_else(|| now.month());
    if !(1..=12).contains(&month) {
        return Err(AppError::Validation("Invalid year or month".into()));
    }

    let revenue = DashboardRepo::monthly_revenue(&state.pool, year, month as i32).await?;
    Ok(response::ok(json!({
        "revenue": revenue,
        "year": year,
        "month": month,
    })))
}

/// GET /api/dashboard/weekly
///
/// Last seven days of revenue, reshaped into chart points.
pub async fn weekly(
    _auth: AuthSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = DashboardRepo::weekly_revenue(&state.pool).await?;
    let chart: Vec<ChartPoint> = rows
        .into_iter()
        .map(|row| ChartPoint {
            date: row.date_label,
            count: row.daily_revenue,
        })
        .collect();
    Ok(response::ok(chart))
}
