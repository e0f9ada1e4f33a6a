//! Persistent store for the vehicle catalog
//!
//! Vehicles are kept in a flat text file, one `name,efficiency` record per line.

pub mod catalog;
pub mod record;

pub use catalog::{LoadReport, VehicleCatalog};
