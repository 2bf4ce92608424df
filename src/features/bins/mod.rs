//! Bin registry: the canonical set of smart bins and their fill levels.
//!
//! Status is never stored; it is derived from `fill_level`/`capacity` through
//! [`models::compute_status`] wherever a bin leaves the service layer. The
//! fill-level simulation lives here too, as explicit operations rather than a
//! side effect of reads.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/bins` | List bins in id order |
//! | GET | `/api/bins/{id}` | Fetch a single bin |
//! | POST | `/api/bins` | Register a bin |
//! | PUT | `/api/bins/{id}/fill` | Set a bin's fill level |
//! | DELETE | `/api/bins/{id}` | Remove a bin and its maintenance requests |
//! | POST | `/api/simulation/tick` | Randomly perturb fill levels |
//! | POST | `/api/simulation/seed` | Seed bins across the configured cities |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{BinService, SimulationService};
