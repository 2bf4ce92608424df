use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::maintenance::models::{MaintenanceRequest, MaintenanceStatus};

/// Request DTO for scheduling maintenance on a bin
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ScheduleMaintenanceDto {
    /// Category of work; defaults to "collection". `type` is accepted as an
    /// alias.
    #[serde(alias = "type")]
    pub request_type: Option<String>,
    /// When the work should happen; defaults to the next day
    pub scheduled_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Maintenance request joined with the identity of its bin
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceRequestResponseDto {
    pub id: i64,
    pub bin_id: i64,
    pub request_type: String,
    pub status: MaintenanceStatus,
    pub notes: String,
    pub requested_at: DateTime<Utc>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub bin_city: String,
    pub bin_lat: f64,
    pub bin_lon: f64,
}

impl MaintenanceRequestResponseDto {
    pub fn from_request(request: MaintenanceRequest, city: String, lat: f64, lon: f64) -> Self {
        Self {
            id: request.id,
            bin_id: request.bin_id,
            request_type: request.request_type,
            status: request.status,
            notes: request.notes,
            requested_at: request.requested_at,
            scheduled_at: request.scheduled_at,
            completed_at: request.completed_at,
            bin_city: city,
            bin_lat: lat,
            bin_lon: lon,
        }
    }
}
