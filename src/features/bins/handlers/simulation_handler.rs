use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::features::bins::dtos::{SeedResponseDto, SimulationTickResponseDto};
use crate::features::bins::services::SimulationService;

/// Apply one random perturbation pass over all fill levels
#[utoipa::path(
    post,
    path = "/api/simulation/tick",
    responses(
        (status = 200, description = "Tick applied", body = SimulationTickResponseDto),
    ),
    tag = "simulation"
)]
pub async fn simulation_tick(
    State(service): State<Arc<SimulationService>>,
) -> Result<Json<SimulationTickResponseDto>> {
    let updated_bins = service.perturb_all().await?;
    Ok(Json(SimulationTickResponseDto { updated_bins }))
}

/// Seed bins across the configured cities
#[utoipa::path(
    post,
    path = "/api/simulation/seed",
    responses(
        (status = 201, description = "Registry seeded", body = SeedResponseDto),
    ),
    tag = "simulation"
)]
pub async fn simulation_seed(
    State(service): State<Arc<SimulationService>>,
) -> Result<(StatusCode, Json<SeedResponseDto>)> {
    let created_bins = service.seed().await?;
    Ok((StatusCode::CREATED, Json(SeedResponseDto { created_bins })))
}
