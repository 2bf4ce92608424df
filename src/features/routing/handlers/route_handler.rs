use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::routing::dtos::RouteResponseDto;
use crate::features::routing::services::RouteService;

/// Get the collection route over the full bins
///
/// Always 200 when the registry is readable; provider failures degrade to a
/// straight-line geometry.
#[utoipa::path(
    get,
    path = "/api/route",
    responses(
        (status = 200, description = "Collection route", body = RouteResponseDto),
    ),
    tag = "routing"
)]
pub async fn get_route(
    State(service): State<Arc<RouteService>>,
) -> Result<Json<RouteResponseDto>> {
    let route = service.plan_route().await?;
    Ok(Json(route))
}
