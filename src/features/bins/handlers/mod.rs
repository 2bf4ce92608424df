pub mod bin_handler;
pub mod simulation_handler;
