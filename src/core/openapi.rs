use utoipa::{Modify, OpenApi};

use crate::features::bins::{dtos as bins_dtos, handlers as bins_handlers, models as bins_models};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::maintenance::{
    dtos as maintenance_dtos, handlers as maintenance_handlers, models as maintenance_models,
};
use crate::features::routing::{dtos as routing_dtos, handlers as routing_handlers};
use crate::shared::types::{DeleteResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Bins
        bins_handlers::bin_handler::list_bins,
        bins_handlers::bin_handler::get_bin,
        bins_handlers::bin_handler::create_bin,
        bins_handlers::bin_handler::update_fill_level,
        bins_handlers::bin_handler::delete_bin,
        // Simulation
        bins_handlers::simulation_handler::simulation_tick,
        bins_handlers::simulation_handler::simulation_seed,
        // Maintenance
        maintenance_handlers::maintenance_handler::schedule_maintenance,
        maintenance_handlers::maintenance_handler::list_maintenance_requests,
        // Routing
        routing_handlers::route_handler::get_route,
        // Dashboard
        dashboard_handlers::dashboard_handler::get_statistics,
        dashboard_handlers::dashboard_handler::get_heatmap,
        dashboard_handlers::dashboard_handler::health_check,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            DeleteResponse,
            // Bins
            bins_models::BinStatus,
            bins_dtos::BinResponseDto,
            bins_dtos::CreateBinDto,
            bins_dtos::UpdateFillLevelDto,
            bins_dtos::SimulationTickResponseDto,
            bins_dtos::SeedResponseDto,
            // Maintenance
            maintenance_models::MaintenanceStatus,
            maintenance_dtos::ScheduleMaintenanceDto,
            maintenance_dtos::MaintenanceRequestResponseDto,
            // Routing
            routing_dtos::RouteResponseDto,
            // Dashboard
            dashboard_dtos::StatisticsDto,
            dashboard_dtos::HealthDto,
        )
    ),
    tags(
        (name = "bins", description = "Bin registry"),
        (name = "simulation", description = "Fill-level simulation (explicit writes)"),
        (name = "maintenance", description = "Maintenance scheduling"),
        (name = "routing", description = "Collection route assembly"),
        (name = "dashboard", description = "Statistics, heatmap and health"),
    ),
    info(
        title = "Smartwaste API",
        version = "0.1.0",
        description = "API documentation for the smart waste backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
