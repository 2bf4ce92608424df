use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::bins::dtos::{BinResponseDto, CreateBinDto, UpdateFillLevelDto};
use crate::features::bins::services::BinService;
use crate::shared::types::{DeleteResponse, ErrorResponse};

/// List all bins in id order
#[utoipa::path(
    get,
    path = "/api/bins",
    responses(
        (status = 200, description = "All registered bins", body = Vec<BinResponseDto>),
    ),
    tag = "bins"
)]
pub async fn list_bins(
    State(service): State<Arc<BinService>>,
) -> Result<Json<Vec<BinResponseDto>>> {
    let bins = service.list().await?;
    Ok(Json(bins))
}

/// Get a single bin
#[utoipa::path(
    get,
    path = "/api/bins/{id}",
    params(
        ("id" = i64, Path, description = "Bin id")
    ),
    responses(
        (status = 200, description = "Bin found", body = BinResponseDto),
        (status = 404, description = "Bin not found", body = ErrorResponse)
    ),
    tag = "bins"
)]
pub async fn get_bin(
    State(service): State<Arc<BinService>>,
    Path(id): Path<i64>,
) -> Result<Json<BinResponseDto>> {
    let bin = service.get(id).await?;
    Ok(Json(bin))
}

/// Register a new bin
#[utoipa::path(
    post,
    path = "/api/bins",
    request_body = CreateBinDto,
    responses(
        (status = 201, description = "Bin created", body = BinResponseDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse)
    ),
    tag = "bins"
)]
pub async fn create_bin(
    State(service): State<Arc<BinService>>,
    AppJson(dto): AppJson<CreateBinDto>,
) -> Result<(StatusCode, Json<BinResponseDto>)> {
    let bin = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(bin)))
}

/// Set a bin's fill level
#[utoipa::path(
    put,
    path = "/api/bins/{id}/fill",
    params(
        ("id" = i64, Path, description = "Bin id")
    ),
    request_body = UpdateFillLevelDto,
    responses(
        (status = 200, description = "Fill level updated", body = BinResponseDto),
        (status = 400, description = "Fill level out of range", body = ErrorResponse),
        (status = 404, description = "Bin not found", body = ErrorResponse)
    ),
    tag = "bins"
)]
pub async fn update_fill_level(
    State(service): State<Arc<BinService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateFillLevelDto>,
) -> Result<Json<BinResponseDto>> {
    let bin = service.update_fill_level(id, dto).await?;
    Ok(Json(bin))
}

/// Delete a bin and its maintenance requests
#[utoipa::path(
    delete,
    path = "/api/bins/{id}",
    params(
        ("id" = i64, Path, description = "Bin id")
    ),
    responses(
        (status = 200, description = "Bin deleted", body = DeleteResponse),
        (status = 404, description = "Bin not found", body = ErrorResponse)
    ),
    tag = "bins"
)]
pub async fn delete_bin(
    State(service): State<Arc<BinService>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    let confirmation = service.delete(id).await?;
    Ok(Json(confirmation))
}
