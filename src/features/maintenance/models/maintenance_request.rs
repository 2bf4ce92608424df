use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Database model for a maintenance request
#[derive(Debug, Clone, FromRow)]
pub struct MaintenanceRequest {
    pub id: i64,
    pub bin_id: i64,
    pub request_type: String,
    pub status: MaintenanceStatus,
    pub notes: String,
    pub requested_at: DateTime<Utc>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MaintenanceStatus {
    Pending,
    Completed,
}
