use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO for a simulation tick
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SimulationTickResponseDto {
    /// Bins whose fill level changed this tick
    pub updated_bins: u64,
}

/// Response DTO for seeding the registry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeedResponseDto {
    pub created_bins: u64,
}
