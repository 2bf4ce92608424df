//! Maintenance scheduling for bins.
//!
//! Requests are created pending and never transitioned here; the `completed`
//! status and timestamp exist in the schema for the collection crews'
//! tooling.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/bins/{id}/maintenance` | Schedule maintenance for a bin |
//! | GET | `/api/maintenance` | List requests, newest first |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::MaintenanceService;
