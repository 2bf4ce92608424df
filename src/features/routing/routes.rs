use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::routing::handlers::route_handler;
use crate::features::routing::services::RouteService;

/// Create routes for the routing feature
pub fn routes(service: Arc<RouteService>) -> Router {
    Router::new()
        .route("/api/route", get(route_handler::get_route))
        .with_state(service)
}
