mod bin_dto;
mod simulation_dto;

pub use bin_dto::{BinResponseDto, CreateBinDto, UpdateFillLevelDto};
pub use simulation_dto::{SeedResponseDto, SimulationTickResponseDto};
