//! Vehicle quoting and registration use cases

use fuelcost_domain::model::{Route, Vehicle};
use fuelcost_domain::repository::VehicleRepository;
use fuelcost_domain::service::{quote_fleet, quote_vehicle, QuoteParams, VehicleQuote};
use fuelcost_types::{CatalogError, Error, Result};

use crate::constants::default_fleet;

/// Outcome of seeding a catalog with the built-in fleet
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub added: Vec<String>,
    pub already_present: Vec<String>,
}

/// One route if given, otherwise every route
pub fn select_routes(route: Option<Route>) -> Vec<Route> {
    match route {
        Some(route) => vec![route],
        None => Route::all().collect(),
    }
}

/// Quote a catalog vehicle by name
pub fn quote_named<R: VehicleRepository>(
    repo: &R,
    name: &str,
    routes: &[Route],
    params: QuoteParams,
) -> Result<VehicleQuote> {
    let vehicle = repo
        .find_by_name(name)?
        .ok_or_else(|| Error::VehicleNotFound(name.trim().to_string()))?;
    quote_vehicle(&vehicle, routes, params)
}

/// Quote every catalog vehicle in catalog order
pub fn quote_all<R: VehicleRepository>(
    repo: &R,
    routes: &[Route],
    params: QuoteParams,
) -> Result<Vec<VehicleQuote>> {
    let vehicles = repo.find_all()?;
    quote_fleet(&vehicles, routes, params)
}

pub fn register_vehicle<R: VehicleRepository>(
    repo: &mut R,
    name: &str,
    efficiency: f64,
) -> Result<Vehicle> {
    let vehicle = Vehicle::new(name, efficiency)?;
    repo.save(vehicle.clone())?;
    Ok(vehicle)
}

/// Add every built-in vehicle whose name is not in the catalog yet
pub fn seed_default_fleet<R: VehicleRepository>(repo: &mut R) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for vehicle in default_fleet()? {
        let name = vehicle.name().to_string();
        match repo.save(vehicle) {
            Ok(()) => summary.added.push(name),
            Err(Error::Catalog(CatalogError::DuplicateName(_))) => {
                summary.already_present.push(name)
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}
