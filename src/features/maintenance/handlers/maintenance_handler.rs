use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::maintenance::dtos::{MaintenanceRequestResponseDto, ScheduleMaintenanceDto};
use crate::features::maintenance::services::MaintenanceService;
use crate::shared::types::ErrorResponse;

/// Schedule maintenance for a bin
#[utoipa::path(
    post,
    path = "/api/bins/{id}/maintenance",
    params(
        ("id" = i64, Path, description = "Bin id")
    ),
    request_body = ScheduleMaintenanceDto,
    responses(
        (status = 201, description = "Request created", body = MaintenanceRequestResponseDto),
        (status = 404, description = "Bin not found", body = ErrorResponse)
    ),
    tag = "maintenance"
)]
pub async fn schedule_maintenance(
    State(service): State<Arc<MaintenanceService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<ScheduleMaintenanceDto>,
) -> Result<(StatusCode, Json<MaintenanceRequestResponseDto>)> {
    let request = service.schedule(id, dto).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// List maintenance requests, newest first
#[utoipa::path(
    get,
    path = "/api/maintenance",
    responses(
        (status = 200, description = "All requests with bin identity fields", body = Vec<MaintenanceRequestResponseDto>),
    ),
    tag = "maintenance"
)]
pub async fn list_maintenance_requests(
    State(service): State<Arc<MaintenanceService>>,
) -> Result<Json<Vec<MaintenanceRequestResponseDto>>> {
    let requests = service.list().await?;
    Ok(Json(requests))
}
