use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::bins::handlers::{bin_handler, simulation_handler};
use crate::features::bins::services::{BinService, SimulationService};

/// Create routes for the bin registry and the simulation
pub fn routes(bin_service: Arc<BinService>, simulation_service: Arc<SimulationService>) -> Router {
    let bins = Router::new()
        .route(
            "/api/bins",
            get(bin_handler::list_bins).post(bin_handler::create_bin),
        )
        .route(
            "/api/bins/{id}",
            get(bin_handler::get_bin).delete(bin_handler::delete_bin),
        )
        .route("/api/bins/{id}/fill", put(bin_handler::update_fill_level))
        .with_state(bin_service);

    let simulation = Router::new()
        .route(
            "/api/simulation/tick",
            post(simulation_handler::simulation_tick),
        )
        .route(
            "/api/simulation/seed",
            post(simulation_handler::simulation_seed),
        )
        .with_state(simulation_service);

    bins.merge(simulation)
}
