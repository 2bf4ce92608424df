use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// In-memory store with migrations applied.
///
/// A single connection is required: every `sqlite::memory:` connection is its
/// own database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations failed");

    // The cascade tests rely on foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("failed to enable foreign keys");

    pool
}

/// Insert a bin row directly, bypassing the service layer
pub async fn insert_bin(pool: &SqlitePool, city: &str, lat: f64, lon: f64, fill_level: i64) -> i64 {
    let now = Utc::now();
    sqlx::query_scalar(
        r#"
        INSERT INTO bins (city, lat, lon, capacity, fill_level, last_updated, created_at)
        VALUES (?, ?, ?, 100, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(city)
    .bind(lat)
    .bind(lon)
    .bind(fill_level)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .expect("failed to insert bin")
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("failed to count rows")
}
