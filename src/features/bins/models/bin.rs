use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::shared::constants::{CRITICAL_THRESHOLD_PCT, WARNING_THRESHOLD_PCT};

/// Database model for a smart bin
#[derive(Debug, Clone, FromRow)]
pub struct Bin {
    pub id: i64,
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub capacity: i64,
    pub fill_level: i64,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Bin {
    pub fn status(&self) -> BinStatus {
        compute_status(self.fill_level, self.capacity)
    }
}

/// Derived bin condition. Never persisted; always recomputed from the fill
/// level so it cannot drift from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BinStatus {
    Good,
    Warning,
    Critical,
}

/// Classify a fill level: above 90% of capacity is critical, above 70% is
/// warning, anything else is good.
pub fn compute_status(fill_level: i64, capacity: i64) -> BinStatus {
    let pct = fill_level as f64 * 100.0 / capacity as f64;
    if pct > CRITICAL_THRESHOLD_PCT {
        BinStatus::Critical
    } else if pct > WARNING_THRESHOLD_PCT {
        BinStatus::Warning
    } else {
        BinStatus::Good
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_status_boundaries() {
        assert_eq!(compute_status(0, 100), BinStatus::Good);
        assert_eq!(compute_status(70, 100), BinStatus::Good);
        assert_eq!(compute_status(71, 100), BinStatus::Warning);
        assert_eq!(compute_status(90, 100), BinStatus::Warning);
        assert_eq!(compute_status(91, 100), BinStatus::Critical);
        assert_eq!(compute_status(100, 100), BinStatus::Critical);
    }

    #[test]
    fn test_compute_status_scales_with_capacity() {
        // 141/200 is 70.5%, just over the warning line
        assert_eq!(compute_status(140, 200), BinStatus::Good);
        assert_eq!(compute_status(141, 200), BinStatus::Warning);
        assert_eq!(compute_status(181, 200), BinStatus::Critical);
    }
}
