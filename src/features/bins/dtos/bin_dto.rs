use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::bins::models::{Bin, BinStatus};

/// Request DTO for registering a bin.
///
/// All fields are optional at the wire level; presence of `city`, `lat` and
/// `lon` is enforced by the service so a missing field yields a 400 envelope
/// instead of a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBinDto {
    /// Identifying name; `name` is accepted as an alias
    #[serde(alias = "name")]
    pub city: Option<String>,
    pub lat: Option<f64>,
    /// Longitude; `lng` is accepted as an alias
    #[serde(alias = "lng")]
    pub lon: Option<f64>,
    /// Defaults to 100
    pub capacity: Option<i64>,
    /// Defaults to 0
    pub fill_level: Option<i64>,
}

/// Request DTO for an explicit fill-level change
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateFillLevelDto {
    pub fill_level: i64,
}

/// Bin as returned by every endpoint, with the derived status attached
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BinResponseDto {
    pub id: i64,
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub capacity: i64,
    pub fill_level: i64,
    pub status: BinStatus,
    pub last_updated: DateTime<Utc>,
}

impl From<Bin> for BinResponseDto {
    fn from(bin: Bin) -> Self {
        let status = bin.status();
        Self {
            id: bin.id,
            city: bin.city,
            lat: bin.lat,
            lon: bin.lon,
            capacity: bin.capacity,
            fill_level: bin.fill_level,
            status,
            last_updated: bin.last_updated,
        }
    }
}
