use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::maintenance::handlers::maintenance_handler;
use crate::features::maintenance::services::MaintenanceService;

/// Create routes for the maintenance feature
pub fn routes(service: Arc<MaintenanceService>) -> Router {
    Router::new()
        .route(
            "/api/bins/{id}/maintenance",
            post(maintenance_handler::schedule_maintenance),
        )
        .route(
            "/api/maintenance",
            get(maintenance_handler::list_maintenance_requests),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{count_rows, insert_bin, test_pool};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_schedule_and_list_roundtrip() {
        let pool = test_pool().await;
        let server =
            TestServer::new(routes(Arc::new(MaintenanceService::new(pool.clone())))).unwrap();
        let bin_id = insert_bin(&pool, "Kolkata", 22.57, 88.36, 95).await;

        let response = server
            .post(&format!("/api/bins/{bin_id}/maintenance"))
            .json(&json!({"type": "pickup", "notes": "smells bad"}))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let created: Value = response.json();
        assert_eq!(created["request_type"], "pickup");
        assert_eq!(created["status"], "pending");

        let listed: Vec<Value> = server.get("/api/maintenance").await.json();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["bin_city"], "Kolkata");
    }

    #[tokio::test]
    async fn test_schedule_for_missing_bin_yields_404() {
        let pool = test_pool().await;
        let server =
            TestServer::new(routes(Arc::new(MaintenanceService::new(pool.clone())))).unwrap();

        let response = server
            .post("/api/bins/99/maintenance")
            .json(&json!({}))
            .await;

        response.assert_status(axum::http::StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("99"));
        assert_eq!(count_rows(&pool, "maintenance_requests").await, 0);
    }
}
