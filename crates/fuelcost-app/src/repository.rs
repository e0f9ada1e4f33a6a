//! Repository adapters for persistence layer

use std::path::PathBuf;

use fuelcost_store::{LoadReport, VehicleCatalog};
use fuelcost_types::Result;

use crate::config::Config;

/// Open the vehicle catalog at the configured store path
pub fn open_catalog(config: &Config) -> Result<(VehicleCatalog, LoadReport)> {
    let store_path = config.store_path()?;
    Ok(open_catalog_at(store_path))
}

/// Open the vehicle catalog at a custom path
pub fn open_catalog_at(store_path: PathBuf) -> (VehicleCatalog, LoadReport) {
    VehicleCatalog::load(store_path)
}
