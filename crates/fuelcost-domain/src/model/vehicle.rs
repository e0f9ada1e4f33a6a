//! Vehicle type definitions

use serde::Serialize;

use fuelcost_types::{Error, Result};

/// A named vehicle with its fuel efficiency (distance per unit of fuel)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    name: String,
    efficiency: f64,
}

impl Vehicle {
    /// Create a vehicle, validating the name and efficiency
    ///
    /// The name is trimmed. It must be non-empty and must not contain a comma
    /// or a line break, since the record store cannot represent either.
    pub fn new(name: impl Into<String>, efficiency: f64) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::InvalidInput("vehicle name must not be empty".to_string()));
        }
        if name.contains([',', '\n', '\r']) {
            return Err(Error::InvalidInput(format!(
                "vehicle name must not contain commas or line breaks: {:?}",
                name
            )));
        }
        ensure_efficiency(efficiency)?;

        Ok(Self { name, efficiency })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Case-insensitive name comparison
    pub fn matches_name(&self, name: &str) -> bool {
        normalize_name(&self.name) == normalize_name(name)
    }
}

/// Reject efficiencies the cost model cannot divide by
///
/// Subnormal values are rejected too: dividing a route distance by one overflows.
pub(crate) fn ensure_efficiency(efficiency: f64) -> Result<()> {
    if !efficiency.is_normal() || efficiency < 0.0 {
        return Err(Error::InvalidInput(format!(
            "efficiency must be a positive number, got {}",
            efficiency
        )));
    }
    Ok(())
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name() {
        let vehicle = Vehicle::new("  land rover ", 11.1).unwrap();
        assert_eq!(vehicle.name(), "land rover");
        assert!((vehicle.efficiency() - 11.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_empty_name() {
        assert!(matches!(Vehicle::new("   ", 5.0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_comma_in_name() {
        assert!(matches!(Vehicle::new("rolls,royce", 8.0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_non_positive_efficiency() {
        assert!(Vehicle::new("porsche", 0.0).is_err());
        assert!(Vehicle::new("porsche", -1.0).is_err());
        assert!(Vehicle::new("porsche", f64::NAN).is_err());
        assert!(Vehicle::new("porsche", f64::INFINITY).is_err());
        assert!(Vehicle::new("porsche", 1e-310).is_err());
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let vehicle = Vehicle::new("Aston Martin", 10.5).unwrap();
        assert!(vehicle.matches_name("aston martin"));
        assert!(vehicle.matches_name("ASTON MARTIN "));
        assert!(!vehicle.matches_name("aston"));
    }
}
