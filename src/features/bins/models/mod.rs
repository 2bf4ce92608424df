mod bin;

pub use bin::{compute_status, Bin, BinStatus};
