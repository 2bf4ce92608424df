mod maintenance_dto;

pub use maintenance_dto::{MaintenanceRequestResponseDto, ScheduleMaintenanceDto};
