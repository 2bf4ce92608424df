use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::bins::models::{compute_status, BinStatus};
use crate::features::dashboard::dtos::{HealthDto, StatisticsDto};

/// Service for read-only aggregates over the registry
pub struct DashboardService {
    pool: SqlitePool,
}

impl DashboardService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Aggregate counts and the mean fill level. Status counts go through
    /// the same classification function as every bin response.
    pub async fn get_statistics(&self) -> Result<StatisticsDto> {
        let rows = sqlx::query_as::<_, (i64, i64)>("SELECT fill_level, capacity FROM bins")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load bins for statistics: {:?}", e);
                AppError::Database(e)
            })?;

        let total = rows.len() as i64;
        let mut critical = 0i64;
        let mut warning = 0i64;
        let mut good = 0i64;
        let mut fill_sum = 0i64;
        for (fill_level, capacity) in &rows {
            fill_sum += fill_level;
            match compute_status(*fill_level, *capacity) {
                BinStatus::Critical => critical += 1,
                BinStatus::Warning => warning += 1,
                BinStatus::Good => good += 1,
            }
        }

        let average_fill_level = if total == 0 {
            0.0
        } else {
            (fill_sum as f64 / total as f64 * 10.0).round() / 10.0
        };

        let pending_maintenance_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM maintenance_requests WHERE status = 'pending'",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count pending maintenance: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(StatisticsDto {
            total,
            critical,
            warning,
            good,
            average_fill_level,
            pending_maintenance_count,
        })
    }

    /// Heatmap feed: `[lat, lon, fill ratio]` per bin
    pub async fn get_heatmap(&self) -> Result<Vec<[f64; 3]>> {
        let rows = sqlx::query_as::<_, (f64, f64, i64, i64)>(
            "SELECT lat, lon, fill_level, capacity FROM bins ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load bins for heatmap: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|(lat, lon, fill_level, capacity)| {
                [lat, lon, fill_level as f64 / capacity as f64]
            })
            .collect())
    }

    /// Liveness probe with the registry size
    pub async fn health(&self) -> Result<HealthDto> {
        let bins_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bins")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count bins: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(HealthDto {
            status: "healthy".to_string(),
            bins_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{insert_bin, test_pool};
    use chrono::Utc;

    #[tokio::test]
    async fn test_statistics_on_empty_registry_are_all_zero() {
        let service = DashboardService::new(test_pool().await);

        let stats = service.get_statistics().await.unwrap();

        assert_eq!(stats.total, 0);
        assert_eq!(stats.critical, 0);
        assert_eq!(stats.warning, 0);
        assert_eq!(stats.good, 0);
        assert_eq!(stats.average_fill_level, 0.0);
        assert_eq!(stats.pending_maintenance_count, 0);
    }

    #[tokio::test]
    async fn test_statistics_counts_and_one_decimal_average() {
        let pool = test_pool().await;
        let service = DashboardService::new(pool.clone());
        let id = insert_bin(&pool, "Kolkata", 22.57, 88.36, 95).await;
        insert_bin(&pool, "Asansol", 23.70, 86.95, 60).await;
        insert_bin(&pool, "Siliguri", 26.70, 88.40, 30).await;

        sqlx::query("INSERT INTO maintenance_requests (bin_id, requested_at) VALUES (?, ?)")
            .bind(id)
            .bind(Utc::now())
            .execute(&pool)
            .await
            .unwrap();

        let stats = service.get_statistics().await.unwrap();

        assert_eq!(stats.total, 3);
        assert_eq!(stats.critical, 1);
        assert_eq!(stats.warning, 0);
        assert_eq!(stats.good, 2);
        // (95 + 60 + 30) / 3 = 61.666...
        assert_eq!(stats.average_fill_level, 61.7);
        assert_eq!(stats.pending_maintenance_count, 1);
    }

    #[tokio::test]
    async fn test_heatmap_emits_fill_ratio_triples() {
        let pool = test_pool().await;
        let service = DashboardService::new(pool.clone());
        insert_bin(&pool, "Kolkata", 22.57, 88.36, 75).await;

        let heatmap = service.get_heatmap().await.unwrap();

        assert_eq!(heatmap, vec![[22.57, 88.36, 0.75]]);
    }

    #[tokio::test]
    async fn test_health_reports_bin_count() {
        let pool = test_pool().await;
        let service = DashboardService::new(pool.clone());
        insert_bin(&pool, "Kolkata", 22.57, 88.36, 75).await;
        insert_bin(&pool, "Asansol", 23.70, 86.95, 20).await;

        let health = service.health().await.unwrap();

        assert_eq!(health.status, "healthy");
        assert_eq!(health.bins_count, 2);
    }
}
