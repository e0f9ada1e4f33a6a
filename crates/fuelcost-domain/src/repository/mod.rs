//! Repository trait definitions for data persistence

use fuelcost_types::Result;

use crate::model::Vehicle;

/// Repository for named vehicles
pub trait VehicleRepository {
    /// Add a vehicle; fails if the name is already taken
    fn save(&mut self, vehicle: Vehicle) -> Result<()>;

    /// Find a vehicle by name (case-insensitive)
    fn find_by_name(&self, name: &str) -> Result<Option<Vehicle>>;

    /// Find all vehicles in insertion order
    fn find_all(&self) -> Result<Vec<Vehicle>>;
}
