use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::bins::dtos::{BinResponseDto, CreateBinDto, UpdateFillLevelDto};
use crate::features::bins::models::Bin;
use crate::shared::constants::DEFAULT_CAPACITY;
use crate::shared::types::DeleteResponse;

const BIN_COLUMNS: &str = "id, city, lat, lon, capacity, fill_level, last_updated, created_at";

/// Service owning the canonical bin set
pub struct BinService {
    pool: SqlitePool,
}

impl BinService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all bins in ascending id order. Pure read: fill levels only change
    /// through explicit operations.
    pub async fn list(&self) -> Result<Vec<BinResponseDto>> {
        let bins = sqlx::query_as::<_, Bin>(&format!(
            "SELECT {BIN_COLUMNS} FROM bins ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list bins: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(bins.into_iter().map(|b| b.into()).collect())
    }

    /// Get a bin by id
    pub async fn get(&self, id: i64) -> Result<BinResponseDto> {
        let bin = sqlx::query_as::<_, Bin>(&format!(
            "SELECT {BIN_COLUMNS} FROM bins WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get bin {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        bin.map(|b| b.into())
            .ok_or_else(|| AppError::NotFound(format!("Bin {} not found", id)))
    }

    /// Register a new bin. Requires city, lat and lon; capacity defaults to
    /// 100 and fill level to 0.
    pub async fn create(&self, dto: CreateBinDto) -> Result<BinResponseDto> {
        let city = dto
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::Validation("city is required".to_string()))?;

        let lat = dto
            .lat
            .ok_or_else(|| AppError::Validation("lat is required".to_string()))?;
        let lon = dto
            .lon
            .ok_or_else(|| AppError::Validation("lon is required".to_string()))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::Validation(
                "lat must be between -90 and 90".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(AppError::Validation(
                "lon must be between -180 and 180".to_string(),
            ));
        }

        let capacity = dto.capacity.unwrap_or(DEFAULT_CAPACITY);
        if capacity <= 0 {
            return Err(AppError::Validation("capacity must be positive".to_string()));
        }

        let fill_level = dto.fill_level.unwrap_or(0);
        if fill_level < 0 || fill_level > capacity {
            return Err(AppError::Validation(format!(
                "fill_level must be between 0 and {}",
                capacity
            )));
        }

        let now = Utc::now();
        let bin = sqlx::query_as::<_, Bin>(&format!(
            r#"
            INSERT INTO bins (city, lat, lon, capacity, fill_level, last_updated, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {BIN_COLUMNS}
            "#
        ))
        .bind(city)
        .bind(lat)
        .bind(lon)
        .bind(capacity)
        .bind(fill_level)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert bin: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Bin registered: id={}, city={}", bin.id, bin.city);

        Ok(bin.into())
    }

    /// Set a bin's fill level and refresh its last-updated timestamp
    pub async fn update_fill_level(&self, id: i64, dto: UpdateFillLevelDto) -> Result<BinResponseDto> {
        let current = self.get(id).await?;

        if dto.fill_level < 0 || dto.fill_level > current.capacity {
            return Err(AppError::Validation(format!(
                "fill_level must be between 0 and {}",
                current.capacity
            )));
        }

        let bin = sqlx::query_as::<_, Bin>(&format!(
            r#"
            UPDATE bins SET fill_level = ?, last_updated = ?
            WHERE id = ?
            RETURNING {BIN_COLUMNS}
            "#
        ))
        .bind(dto.fill_level)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update fill level for bin {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(bin.into())
    }

    /// Delete a bin together with its maintenance requests, as one
    /// transaction.
    pub async fn delete(&self, id: i64) -> Result<DeleteResponse> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin delete transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM bins WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up bin {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if exists.is_none() {
            return Err(AppError::NotFound(format!("Bin {} not found", id)));
        }

        let cascaded = sqlx::query("DELETE FROM maintenance_requests WHERE bin_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete maintenance requests for bin {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .rows_affected();

        sqlx::query("DELETE FROM bins WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete bin {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit delete of bin {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Bin {} deleted, {} maintenance requests cascaded",
            id,
            cascaded
        );

        Ok(DeleteResponse {
            message: format!("Bin {} deleted", id),
            deleted_maintenance_requests: cascaded as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::bins::models::BinStatus;
    use crate::shared::test_helpers::{count_rows, insert_bin, test_pool};

    fn create_dto(city: Option<&str>, lat: Option<f64>, lon: Option<f64>) -> CreateBinDto {
        CreateBinDto {
            city: city.map(str::to_string),
            lat,
            lon,
            capacity: None,
            fill_level: None,
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults_and_derives_status() {
        let service = BinService::new(test_pool().await);

        let bin = service
            .create(create_dto(Some("Kolkata"), Some(22.57), Some(88.36)))
            .await
            .unwrap();

        assert_eq!(bin.capacity, 100);
        assert_eq!(bin.fill_level, 0);
        assert_eq!(bin.status, BinStatus::Good);
    }

    #[tokio::test]
    async fn test_create_without_required_fields_persists_nothing() {
        let pool = test_pool().await;
        let service = BinService::new(pool.clone());

        for dto in [
            create_dto(None, Some(22.57), Some(88.36)),
            create_dto(Some("Kolkata"), None, Some(88.36)),
            create_dto(Some("Kolkata"), Some(22.57), None),
            create_dto(Some("  "), Some(22.57), Some(88.36)),
        ] {
            let err = service.create(dto).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }

        assert_eq!(count_rows(&pool, "bins").await, 0);
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_values() {
        let service = BinService::new(test_pool().await);

        let mut dto = create_dto(Some("Kolkata"), Some(95.0), Some(88.36));
        assert!(matches!(
            service.create(dto).await.unwrap_err(),
            AppError::Validation(_)
        ));

        dto = create_dto(Some("Kolkata"), Some(22.57), Some(88.36));
        dto.fill_level = Some(150);
        assert!(matches!(
            service.create(dto).await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_update_fill_level_recomputes_status_and_timestamp() {
        let pool = test_pool().await;
        let service = BinService::new(pool.clone());
        let id = insert_bin(&pool, "Kolkata", 22.57, 88.36, 10).await;

        let before = service.get(id).await.unwrap();
        let updated = service
            .update_fill_level(id, UpdateFillLevelDto { fill_level: 95 })
            .await
            .unwrap();

        assert_eq!(updated.fill_level, 95);
        assert_eq!(updated.status, BinStatus::Critical);
        assert!(updated.last_updated >= before.last_updated);
    }

    #[tokio::test]
    async fn test_update_fill_level_rejects_values_above_capacity() {
        let pool = test_pool().await;
        let service = BinService::new(pool.clone());
        let id = insert_bin(&pool, "Kolkata", 22.57, 88.36, 10).await;

        let err = service
            .update_fill_level(id, UpdateFillLevelDto { fill_level: 101 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_bin_leaves_store_unchanged() {
        let pool = test_pool().await;
        let service = BinService::new(pool.clone());
        insert_bin(&pool, "Kolkata", 22.57, 88.36, 10).await;

        let err = service.delete(9999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(count_rows(&pool, "bins").await, 1);
    }

    #[tokio::test]
    async fn test_delete_cascades_maintenance_requests() {
        let pool = test_pool().await;
        let service = BinService::new(pool.clone());
        let id = insert_bin(&pool, "Kolkata", 22.57, 88.36, 10).await;
        let other = insert_bin(&pool, "Asansol", 23.70, 86.95, 20).await;

        for bin_id in [id, id, other] {
            sqlx::query(
                "INSERT INTO maintenance_requests (bin_id, requested_at) VALUES (?, ?)",
            )
            .bind(bin_id)
            .bind(Utc::now())
            .execute(&pool)
            .await
            .unwrap();
        }

        let confirmation = service.delete(id).await.unwrap();

        assert_eq!(confirmation.deleted_maintenance_requests, 2);
        assert_eq!(count_rows(&pool, "bins").await, 1);
        assert_eq!(count_rows(&pool, "maintenance_requests").await, 1);
    }

    #[tokio::test]
    async fn test_list_returns_bins_in_id_order() {
        let pool = test_pool().await;
        let service = BinService::new(pool.clone());
        insert_bin(&pool, "Kolkata", 22.57, 88.36, 10).await;
        insert_bin(&pool, "Asansol", 23.70, 86.95, 75).await;
        insert_bin(&pool, "Siliguri", 26.70, 88.40, 95).await;

        let bins = service.list().await.unwrap();

        let ids: Vec<i64> = bins.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(bins[0].status, BinStatus::Good);
        assert_eq!(bins[1].status, BinStatus::Warning);
        assert_eq!(bins[2].status, BinStatus::Critical);
    }
}
