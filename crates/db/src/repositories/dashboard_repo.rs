//! Pass-throughs to the revenue aggregation functions.

use sqlx::PgPool;

/// A `(date_label, daily_revenue)` row from `get_weekly_revenue_chart()`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WeeklyRevenueRow {
    pub date_label: String,
    pub daily_revenue: f64,
}

/// Revenue aggregates computed entirely in SQL.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Total revenue for one calendar month (UTC).
    pub async fn monthly_revenue(
        pool: &PgPool,
        year: i32,
        month: i32,
    ) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar::<_, f64>("SELECT get_monthly_revenue($1, $2)")
            .bind(year)
            .bind(month)
            .fetch_one(pool)
            .await
    }

    /// Per-day revenue for the last seven days, oldest first.
    pub async fn weekly_revenue(pool: &PgPool) -> Result<Vec<WeeklyRevenueRow>, sqlx::Error> {
        sqlx::query_as::<_, WeeklyRevenueRow>("SELECT * FROM get_weekly_revenue_chart()")
            .fetch_all(pool)
            .await
    }
}
