use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::dashboard::handlers::dashboard_handler;
use crate::features::dashboard::services::DashboardService;

/// Create routes for the dashboard feature
pub fn routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/statistics", get(dashboard_handler::get_statistics))
        // short alias used by older dashboards
        .route("/api/stats", get(dashboard_handler::get_statistics))
        .route("/api/heatmap", get(dashboard_handler::get_heatmap))
        .route("/api/health", get(dashboard_handler::health_check))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{insert_bin, test_pool};
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_statistics_served_under_both_paths() {
        let pool = test_pool().await;
        insert_bin(&pool, "Kolkata", 22.57, 88.36, 95).await;
        let server = TestServer::new(routes(Arc::new(DashboardService::new(pool)))).unwrap();

        for path in ["/api/statistics", "/api/stats"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["total"], 1);
            assert_eq!(body["critical"], 1);
        }
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let pool = test_pool().await;
        insert_bin(&pool, "Kolkata", 22.57, 88.36, 40).await;
        let server = TestServer::new(routes(Arc::new(DashboardService::new(pool)))).unwrap();

        let body: Value = server.get("/api/health").await.json();

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["bins_count"], 1);
    }
}
