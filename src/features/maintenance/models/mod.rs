mod maintenance_request;

pub use maintenance_request::{MaintenanceRequest, MaintenanceStatus};
