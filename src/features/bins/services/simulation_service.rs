use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::SqlitePool;

use crate::core::config::SimulationConfig;
use crate::core::error::{AppError, Result};
use crate::shared::constants::{
    CITY_BOUNDS, DEFAULT_CAPACITY, PERTURB_MAX, PERTURB_MIN, PERTURB_PROBABILITY,
};

/// Service driving the fill-level simulation.
///
/// Both operations are explicit writes against the store; plain bin reads
/// never trigger them. The RNG is passed in so tests can pin outcomes.
pub struct SimulationService {
    pool: SqlitePool,
    bins_per_city: u32,
}

impl SimulationService {
    pub fn new(pool: SqlitePool, config: &SimulationConfig) -> Self {
        Self {
            pool,
            bins_per_city: config.bins_per_city,
        }
    }

    /// Perturb fill levels across the registry: each bin changes with
    /// probability 0.3, by a uniform delta in [-5, 15], clamped to
    /// [0, capacity]. Returns the number of bins that changed.
    pub async fn perturb_all(&self) -> Result<u64> {
        self.perturb_all_with_rng(&mut StdRng::from_entropy()).await
    }

    pub async fn perturb_all_with_rng<R: Rng>(&self, rng: &mut R) -> Result<u64> {
        let bins = sqlx::query_as::<_, (i64, i64, i64)>(
            "SELECT id, capacity, fill_level FROM bins ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load bins for simulation tick: {:?}", e);
            AppError::Database(e)
        })?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin simulation transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let now = Utc::now();
        let mut updated = 0u64;
        for (id, capacity, fill_level) in bins {
            if !rng.gen_bool(PERTURB_PROBABILITY) {
                continue;
            }

            let delta = rng.gen_range(PERTURB_MIN..=PERTURB_MAX);
            let next = (fill_level + delta).clamp(0, capacity);

            sqlx::query("UPDATE bins SET fill_level = ?, last_updated = ? WHERE id = ?")
                .bind(next)
                .bind(now)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to perturb bin {}: {:?}", id, e);
                    AppError::Database(e)
                })?;

            updated += 1;
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit simulation tick: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Simulation tick perturbed {} bins", updated);

        Ok(updated)
    }

    /// Seed the registry with bins scattered across the configured cities,
    /// fill levels uniform in [10, 100].
    pub async fn seed(&self) -> Result<u64> {
        self.seed_with_rng(&mut StdRng::from_entropy()).await
    }

    pub async fn seed_with_rng<R: Rng>(&self, rng: &mut R) -> Result<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin seed transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let now = Utc::now();
        let mut created = 0u64;
        for (city, min_lat, max_lat, min_lon, max_lon) in CITY_BOUNDS {
            for _ in 0..self.bins_per_city {
                let lat = round4(rng.gen_range(*min_lat..=*max_lat));
                let lon = round4(rng.gen_range(*min_lon..=*max_lon));
                let fill_level: i64 = rng.gen_range(10..=100);

                sqlx::query(
                    r#"
                    INSERT INTO bins (city, lat, lon, capacity, fill_level, last_updated, created_at)
                    VALUES (?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(city)
                .bind(lat)
                .bind(lon)
                .bind(DEFAULT_CAPACITY)
                .bind(fill_level)
                .bind(now)
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to seed bin in {}: {:?}", city, e);
                    AppError::Database(e)
                })?;

                created += 1;
            }
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit seed: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Seeded {} bins across {} cities", created, CITY_BOUNDS.len());

        Ok(created)
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
