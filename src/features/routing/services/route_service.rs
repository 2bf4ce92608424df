use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::config::RoutingConfig;
use crate::core::error::{AppError, Result};
use crate::features::bins::models::Bin;
use crate::features::routing::dtos::RouteResponseDto;
use crate::features::routing::services::OsrmClient;

/// Service assembling a collection route over the full bins.
///
/// Selection is threshold filtering plus id ordering and nothing more; path
/// optimization belongs to the provider.
pub struct RouteService {
    pool: SqlitePool,
    osrm: Arc<OsrmClient>,
    collection_threshold: i64,
}

impl RouteService {
    pub fn new(pool: SqlitePool, osrm: Arc<OsrmClient>, config: &RoutingConfig) -> Self {
        Self {
            pool,
            osrm,
            collection_threshold: config.collection_threshold,
        }
    }

    /// Plan a collection route: select bins strictly over the threshold in id
    /// order, ask the provider for one geometry across them, and degrade to
    /// the bins' own coordinates when the provider fails. Provider failure is
    /// never surfaced to the caller.
    pub async fn plan_route(&self) -> Result<RouteResponseDto> {
        let bins = sqlx::query_as::<_, Bin>(
            r#"
            SELECT id, city, lat, lon, capacity, fill_level, last_updated, created_at
            FROM bins
            WHERE fill_level > ?
            ORDER BY id
            "#,
        )
        .bind(self.collection_threshold)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to select bins for collection: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Found {} bins needing collection", bins.len());

        // A route is meaningless with fewer than two stops
        if bins.len() < 2 {
            return Ok(RouteResponseDto {
                bins: bins.into_iter().map(|b| b.into()).collect(),
                route_geometry: Vec::new(),
            });
        }

        let waypoints: Vec<(f64, f64)> = bins.iter().map(|b| (b.lat, b.lon)).collect();

        let route_geometry = match self.osrm.driving_route(&waypoints).await {
            Ok(geometry) => geometry,
            Err(e) => {
                tracing::warn!("Routing provider unavailable ({}), using fallback route", e);
                waypoints.iter().map(|&(lat, lon)| [lat, lon]).collect()
            }
        };

        Ok(RouteResponseDto {
            bins: bins.into_iter().map(|b| b.into()).collect(),
            route_geometry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{insert_bin, test_pool};
    use serde_json::json;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(pool: SqlitePool, server: &MockServer) -> RouteService {
        let config = RoutingConfig {
            base_url: server.uri(),
            timeout_secs: 1,
            collection_threshold: 80,
        };
        RouteService::new(pool, Arc::new(OsrmClient::new(&config)), &config)
    }

    #[tokio::test]
    async fn test_single_qualifying_bin_short_circuits_without_provider_call() {
        let pool = test_pool().await;
        insert_bin(&pool, "Kolkata", 22.57, 88.36, 95).await;
        insert_bin(&pool, "Asansol", 23.70, 86.95, 60).await;
        insert_bin(&pool, "Siliguri", 26.70, 88.40, 30).await;

        let server = MockServer::start().await;
        let route = service(pool, &server).plan_route().await.unwrap();

        assert_eq!(route.bins.len(), 1);
        assert_eq!(route.bins[0].id, 1);
        assert!(route.route_geometry.is_empty());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_selection_is_strictly_above_threshold_in_id_order() {
        let pool = test_pool().await;
        insert_bin(&pool, "Kolkata", 22.57, 88.36, 80).await; // at threshold, excluded
        insert_bin(&pool, "Asansol", 23.70, 86.95, 81).await;
        insert_bin(&pool, "Siliguri", 26.70, 88.40, 95).await;

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/route/v1/driving/.*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "routes": [{"geometry": {"coordinates": [[86.95, 23.70], [88.40, 26.70]]}}]
            })))
            .mount(&server)
            .await;

        let route = service(pool, &server).plan_route().await.unwrap();

        let ids: Vec<i64> = route.bins.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(route.route_geometry, vec![[23.70, 86.95], [26.70, 88.40]]);
    }

    #[tokio::test]
    async fn test_provider_error_falls_back_to_straight_line() {
        let pool = test_pool().await;
        insert_bin(&pool, "Kolkata", 22.57, 88.36, 95).await;
        insert_bin(&pool, "Asansol", 23.70, 86.95, 85).await;

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/route/v1/driving/.*"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let route = service(pool, &server).plan_route().await.unwrap();

        assert_eq!(route.bins.len(), 2);
        assert_eq!(route.route_geometry, vec![[22.57, 88.36], [23.70, 86.95]]);
    }

    #[tokio::test]
    async fn test_zero_routes_in_response_falls_back() {
        let pool = test_pool().await;
        insert_bin(&pool, "Kolkata", 22.57, 88.36, 95).await;
        insert_bin(&pool, "Asansol", 23.70, 86.95, 85).await;

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/route/v1/driving/.*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"routes": []})))
            .mount(&server)
            .await;

        let route = service(pool, &server).plan_route().await.unwrap();

        assert_eq!(route.route_geometry, vec![[22.57, 88.36], [23.70, 86.95]]);
    }

    #[tokio::test]
    async fn test_empty_registry_yields_empty_route() {
        let pool = test_pool().await;
        let server = MockServer::start().await;

        let route = service(pool, &server).plan_route().await.unwrap();

        assert!(route.bins.is_empty());
        assert!(route.route_geometry.is_empty());
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
