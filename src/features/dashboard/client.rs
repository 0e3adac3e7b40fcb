//! Client helper for the head-office dashboard endpoint.

use crate::{
    app_lib::{ApiResponse, AppError, get_json},
    features::dashboard::types::DashboardStats,
};

/// Fetches aggregate stats, optionally bounded by an inclusive date range
/// (`YYYY-MM-DD`). Blank bounds are omitted from the query.
pub async fn stats(from_date: &str, to_date: &str) -> Result<DashboardStats, AppError> {
    let mut query = Vec::new();
    if !from_date.trim().is_empty() {
        query.push(format!("fromDate={}", from_date.trim()));
    }
    if !to_date.trim().is_empty() {
        query.push(format!("toDate={}", to_date.trim()));
    }

    let path = if query.is_empty() {
        "/api/dashboard".to_string()
    } else {
        format!("/api/dashboard?{}", query.join("&"))
    };

    let response: ApiResponse<DashboardStats> = get_json(&path).await?;
    response.into_result()
}
