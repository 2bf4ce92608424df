use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::bins::dtos::BinResponseDto;

/// Response DTO for a collection route
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RouteResponseDto {
    /// Bins due for collection, ascending id order
    pub bins: Vec<BinResponseDto>,
    /// Drivable polyline as (lat, lon) pairs; empty with fewer than two
    /// stops, the stops themselves when the provider is unavailable
    #[schema(value_type = Vec<Vec<f64>>)]
    pub route_geometry: Vec<[f64; 2]>,
}
