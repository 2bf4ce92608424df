use chrono::{Duration, Utc};
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::maintenance::dtos::{MaintenanceRequestResponseDto, ScheduleMaintenanceDto};
use crate::features::maintenance::models::MaintenanceRequest;

/// Service for scheduling and listing maintenance requests
pub struct MaintenanceService {
    pool: SqlitePool,
}

impl MaintenanceService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Schedule maintenance for a bin. The bin must exist; an omitted
    /// `scheduled_at` defaults to one day out.
    pub async fn schedule(
        &self,
        bin_id: i64,
        dto: ScheduleMaintenanceDto,
    ) -> Result<MaintenanceRequestResponseDto> {
        let bin = sqlx::query_as::<_, (String, f64, f64)>(
            "SELECT city, lat, lon FROM bins WHERE id = ?",
        )
        .bind(bin_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up bin {}: {:?}", bin_id, e);
            AppError::Database(e)
        })?;

        let Some((city, lat, lon)) = bin else {
            return Err(AppError::NotFound(format!("Bin {} not found", bin_id)));
        };

        let now = Utc::now();
        let request_type = dto
            .request_type
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| "collection".to_string());
        let scheduled_at = dto.scheduled_at.unwrap_or(now + Duration::days(1));
        let notes = dto.notes.unwrap_or_default();

        let request = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests (bin_id, request_type, status, notes, requested_at, scheduled_at)
            VALUES (?, ?, 'pending', ?, ?, ?)
            RETURNING id, bin_id, request_type, status, notes, requested_at, scheduled_at, completed_at
            "#,
        )
        .bind(bin_id)
        .bind(&request_type)
        .bind(&notes)
        .bind(now)
        .bind(scheduled_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert maintenance request: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Maintenance scheduled: id={}, bin_id={}, type={}",
            request.id,
            bin_id,
            request.request_type
        );

        Ok(MaintenanceRequestResponseDto::from_request(
            request, city, lat, lon,
        ))
    }

    /// List all requests joined with bin identity fields, newest first
    pub async fn list(&self) -> Result<Vec<MaintenanceRequestResponseDto>> {
        let requests = sqlx::query_as::<_, MaintenanceRequestResponseDto>(
            r#"
            SELECT
                mr.id, mr.bin_id, mr.request_type, mr.status, mr.notes,
                mr.requested_at, mr.scheduled_at, mr.completed_at,
                b.city AS bin_city, b.lat AS bin_lat, b.lon AS bin_lon
            FROM maintenance_requests mr
            JOIN bins b ON b.id = mr.bin_id
            ORDER BY mr.requested_at DESC, mr.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list maintenance requests: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(requests)
    }
}
