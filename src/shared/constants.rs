/// Fill percentage above which a bin is critical
pub const CRITICAL_THRESHOLD_PCT: f64 = 90.0;

/// Fill percentage above which a bin needs attention
pub const WARNING_THRESHOLD_PCT: f64 = 70.0;

/// Nominal bin capacity when none is given
pub const DEFAULT_CAPACITY: i64 = 100;

// =============================================================================
// SIMULATION CONSTANTS
// =============================================================================

/// Per-bin chance of a fill-level change on a simulation tick
pub const PERTURB_PROBABILITY: f64 = 0.3;

/// Smallest fill-level delta a tick can apply
pub const PERTURB_MIN: i64 = -5;

/// Largest fill-level delta a tick can apply
pub const PERTURB_MAX: i64 = 15;

/// Seeded cities with their bounding boxes (min_lat, max_lat, min_lon, max_lon)
pub const CITY_BOUNDS: &[(&str, f64, f64, f64, f64)] = &[
    ("Kolkata", 22.50, 22.65, 88.30, 88.45),
    ("Asansol", 23.65, 23.75, 86.90, 87.00),
    ("Siliguri", 26.65, 26.75, 88.35, 88.45),
    ("Durgapur", 23.45, 23.55, 87.25, 87.35),
    ("Kharagpur", 22.30, 22.40, 87.25, 87.35),
];
