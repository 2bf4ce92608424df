mod bin_service;
mod simulation_service;

pub use bin_service::BinService;
pub use simulation_service::SimulationService;
