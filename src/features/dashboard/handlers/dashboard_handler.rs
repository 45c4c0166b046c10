use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::dashboard::dtos::{DashboardStatsDto, DashboardSummaryDto};
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Dashboard summary with recent activity
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>),
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>> {
    let summary = service.get_summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Headline statistics only
#[utoipa::path(
    get,
    path = "/api/dashboard-stats/",
    responses(
        (status = 200, description = "Dashboard statistics", body = ApiResponse<DashboardStatsDto>),
    ),
    tag = "dashboard"
)]
pub async fn get_stats(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardStatsDto>>> {
    let stats = service.get_stats().await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}
