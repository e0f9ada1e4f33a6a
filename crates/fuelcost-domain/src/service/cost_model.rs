//! Fuel consumption and cost calculation for routes

use fuelcost_types::{Error, Result};

use crate::model::vehicle::ensure_efficiency;
use crate::model::Route;

/// Fuel used by a vehicle with the given efficiency on `route`
///
/// `distance / (efficiency * efficiency_factor)`
pub fn fuel_consumption(route: Route, efficiency: f64) -> Result<f64> {
    fuel_consumption_explicit(route.distance(), efficiency, route.efficiency_factor())
}

pub fn fuel_consumption_explicit(
    distance: f64,
    efficiency: f64,
    efficiency_factor: f64,
) -> Result<f64> {
    ensure_efficiency(efficiency)?;
    if !distance.is_finite() || distance <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "distance must be a positive number, got {}",
            distance
        )));
    }
    if !efficiency_factor.is_finite() || efficiency_factor <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "efficiency factor must be a positive number, got {}",
            efficiency_factor
        )));
    }

    ensure_finite("fuel consumption", distance / (efficiency * efficiency_factor))
}

/// Fuel cost of driving `route` at the given price per fuel unit
pub fn cost(route: Route, efficiency: f64, fuel_price: f64) -> Result<f64> {
    ensure_fuel_price(fuel_price)?;
    ensure_finite("cost", fuel_consumption(route, efficiency)? * fuel_price)
}

/// Whether a cost is strictly above the caller's threshold
pub fn is_over_threshold(cost: f64, threshold: f64) -> bool {
    cost > threshold
}

/// Inputs near the edges of `f64` can overflow even when each one is valid
fn ensure_finite(what: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidInput(format!("{} is out of range", what)));
    }
    Ok(value)
}

pub(crate) fn ensure_fuel_price(fuel_price: f64) -> Result<()> {
    if !fuel_price.is_finite() || fuel_price < 0.0 {
        return Err(Error::InvalidInput(format!(
            "fuel price must be zero or a positive number, got {}",
            fuel_price
        )));
    }
    Ok(())
}
