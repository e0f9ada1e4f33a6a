//! Constants module

pub mod fleet;

pub use fleet::{default_fleet, DEFAULT_FLEET};

/// Fuel price per fuel unit used when none is configured
pub const DEFAULT_FUEL_PRICE: f64 = 1.48;

/// Route costs above this are flagged
pub const DEFAULT_COST_THRESHOLD: f64 = 400.0;
