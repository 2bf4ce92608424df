mod osrm_client;
mod route_service;

pub use osrm_client::OsrmClient;
pub use route_service::RouteService;
