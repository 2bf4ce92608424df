mod maintenance_service;

pub use maintenance_service::MaintenanceService;
