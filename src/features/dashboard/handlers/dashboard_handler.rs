use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::dashboard::dtos::{HealthDto, StatisticsDto};
use crate::features::dashboard::services::DashboardService;

/// Aggregate statistics over the bin registry
#[utoipa::path(
    get,
    path = "/api/statistics",
    responses(
        (status = 200, description = "Fleet statistics", body = StatisticsDto),
    ),
    tag = "dashboard"
)]
pub async fn get_statistics(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<StatisticsDto>> {
    let stats = service.get_statistics().await?;
    Ok(Json(stats))
}

/// Heatmap feed of fill ratios
#[utoipa::path(
    get,
    path = "/api/heatmap",
    responses(
        (status = 200, description = "One [lat, lon, fill ratio] triple per bin", body = Vec<Vec<f64>>),
    ),
    tag = "dashboard"
)]
pub async fn get_heatmap(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<Vec<[f64; 3]>>> {
    let heatmap = service.get_heatmap().await?;
    Ok(Json(heatmap))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthDto),
    ),
    tag = "dashboard"
)]
pub async fn health_check(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<HealthDto>> {
    let health = service.health().await?;
    Ok(Json(health))
}
