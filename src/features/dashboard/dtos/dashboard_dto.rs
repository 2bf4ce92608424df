use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate statistics over the bin registry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatisticsDto {
    pub total: i64,
    pub critical: i64,
    pub warning: i64,
    pub good: i64,
    /// Arithmetic mean fill level, one decimal; 0 for an empty registry
    pub average_fill_level: f64,
    pub pending_maintenance_count: i64,
}

/// Health probe payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub bins_count: i64,
}
