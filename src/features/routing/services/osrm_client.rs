use serde::Deserialize;
use std::time::Duration;

use crate::core::config::RoutingConfig;
use crate::core::error::{AppError, Result};

/// OSRM route API response structure
#[derive(Debug, Deserialize)]
pub struct OsrmRouteResponse {
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    pub geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
pub struct OsrmGeometry {
    /// GeoJSON order: (lon, lat)
    pub coordinates: Vec<[f64; 2]>,
}

/// Client for an OSRM-compatible driving-route provider
pub struct OsrmClient {
    client: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("SmartwasteCore/1.0 (waste-collection-routing)")
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.base_url.clone(),
        }
    }

    /// Request one driving geometry covering the waypoints in the given
    /// order. Waypoints are (lat, lon) pairs and so is the returned
    /// polyline; the provider's (lon, lat) order is swapped on the way out.
    pub async fn driving_route(&self, waypoints: &[(f64, f64)]) -> Result<Vec<[f64; 2]>> {
        let coordinates = waypoints
            .iter()
            .map(|(lat, lon)| format!("{},{}", lon, lat))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/route/v1/driving/{}?overview=full&geometries=geojson",
            self.base_url, coordinates
        );

        tracing::debug!("Requesting driving route for {} waypoints", waypoints.len());

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!("Routing request failed: {:?}", e);
            AppError::ExternalService(format!("Routing request failed: {}", e))
        })?;

        if !response.status().is_success() {
            tracing::warn!("Routing provider returned status: {}", response.status());
            return Err(AppError::ExternalService(format!(
                "Routing provider returned status {}",
                response.status()
            )));
        }

        let body: OsrmRouteResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse routing response: {:?}", e);
            AppError::ExternalService(format!("Failed to parse routing response: {}", e))
        })?;

        // First route only; the provider already picked its best
        let route = body.routes.into_iter().next().ok_or_else(|| {
            AppError::ExternalService("No routes in provider response".to_string())
        })?;

        Ok(route
            .geometry
            .coordinates
            .into_iter()
            .map(|c| [c[1], c[0]])
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OsrmClient {
        OsrmClient::new(&RoutingConfig {
            base_url: server.uri(),
            timeout_secs: 1,
            collection_threshold: 80,
        })
    }

    #[tokio::test]
    async fn test_driving_route_swaps_coordinates_to_lat_lon() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/route/v1/driving/.*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "routes": [
                    {"geometry": {"coordinates": [[88.36, 22.57], [86.95, 23.70]]}},
                    {"geometry": {"coordinates": [[0.0, 0.0]]}}
                ]
            })))
            .mount(&server)
            .await;

        let geometry = client_for(&server)
            .driving_route(&[(22.57, 88.36), (23.70, 86.95)])
            .await
            .unwrap();

        // first route only, (lon, lat) swapped
        assert_eq!(geometry, vec![[22.57, 88.36], [23.70, 86.95]]);
    }

    #[tokio::test]
    async fn test_driving_route_rejects_non_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/route/v1/driving/.*"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .driving_route(&[(22.57, 88.36), (23.70, 86.95)])
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_driving_route_rejects_empty_route_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/route/v1/driving/.*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"routes": []})))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .driving_route(&[(22.57, 88.36), (23.70, 86.95)])
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_driving_route_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/route/v1/driving/.*"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"routes": []}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .driving_route(&[(22.57, 88.36), (23.70, 86.95)])
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ExternalService(_)));
    }
}
