//! Built-in vehicle list used to seed an empty catalog

use fuelcost_domain::model::Vehicle;
use fuelcost_types::Result;

/// (name, efficiency)
pub const DEFAULT_FLEET: &[(&str, f64)] = &[
    ("porsche", 1.0),
    ("jaguar", 2.0),
    ("lotus", 4.0),
    ("mercedes benz", 6.0),
    ("rolls-royce", 8.0),
    ("bugatti", 9.0),
    ("lamborghini", 10.0),
    ("aston martin", 10.5),
    ("bmw", 11.0),
    ("land rover", 11.1),
];

pub fn default_fleet() -> Result<Vec<Vehicle>> {
    DEFAULT_FLEET
        .iter()
        .map(|&(name, efficiency)| Vehicle::new(name, efficiency))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fleet_is_valid() {
        let fleet = default_fleet().unwrap();
        assert_eq!(fleet.len(), DEFAULT_FLEET.len());
    }

    #[test]
    fn test_default_fleet_names_unique() {
        let fleet = default_fleet().unwrap();
        for (i, vehicle) in fleet.iter().enumerate() {
            assert!(!fleet[i + 1..].iter().any(|v| v.matches_name(vehicle.name())));
        }
    }
}
