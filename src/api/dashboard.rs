//! Dashboard Aggregates

use super::ApiError;
use crate::models::DashboardStats;

pub async fn dashboard_stats() -> Result<DashboardStats, ApiError> {
    super::get_json("/dashboard/stats/").await
}
