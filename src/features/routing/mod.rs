//! Route assembly for collection runs.
//!
//! Bins over the collection threshold are handed to an external
//! OSRM-compatible provider in id order; the provider owns all path
//! optimization. When it is unreachable the endpoint degrades to the bins'
//! own coordinates instead of failing.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/route` | Collection route over the full bins |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::{OsrmClient, RouteService};
