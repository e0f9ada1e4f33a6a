//! Output formatting module

use serde::Serialize;

use fuelcost_domain::model::{Route, Vehicle};
use fuelcost_domain::service::{generate_cost_report, QuoteParams, VehicleQuote};
use fuelcost_store::LoadReport;
use fuelcost_types::{OutputFormat, Result};

#[derive(Serialize)]
struct QuoteOutput<'a> {
    fuel_price: f64,
    threshold: f64,
    vehicles: &'a [VehicleQuote],
}

#[derive(Serialize)]
struct RouteOutput {
    route: Route,
    name: &'static str,
    distance: f64,
    efficiency_factor: f64,
}

pub fn output_quotes(
    output_format: OutputFormat,
    quotes: &[VehicleQuote],
    params: QuoteParams,
) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            let output = QuoteOutput {
                fuel_price: params.fuel_price,
                threshold: params.threshold,
                vehicles: quotes,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            println!("{}", generate_cost_report(quotes, params));
        }
    }
    Ok(())
}

pub fn output_vehicles(output_format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("No vehicles in the catalog. Add one with: fuelcost add <name> <efficiency>");
        return Ok(());
    }

    println!("{:<24} {:>10}", "Vehicle", "Efficiency");
    println!("{}", "-".repeat(35));
    for vehicle in vehicles {
        println!("{:<24} {:>10}", vehicle.name(), vehicle.efficiency());
    }
    println!("\n{} vehicle(s)", vehicles.len());
    Ok(())
}

pub fn output_routes(output_format: OutputFormat) -> Result<()> {
    let routes: Vec<RouteOutput> = Route::all()
        .map(|route| RouteOutput {
            route,
            name: route.name(),
            distance: route.distance(),
            efficiency_factor: route.efficiency_factor(),
        })
        .collect();

    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    println!("{:<10} {:<14} {:>10} {:>8}", "Id", "Route", "Distance", "Factor");
    println!("{}", "-".repeat(45));
    for route in &routes {
        println!(
            "{:<10} {:<14} {:>10.1} {:>8.2}",
            route.route.slug(),
            route.name,
            route.distance,
            route.efficiency_factor
        );
    }
    Ok(())
}

/// Print catalog load notices to stderr
pub fn report_load(report: &LoadReport, verbose: bool) {
    for line in load_notices(report, verbose) {
        eprintln!("{}", line);
    }
}

fn load_notices(report: &LoadReport, verbose: bool) -> Vec<String> {
    let mut notices = Vec::new();
    if verbose && report.store_found() {
        notices.push(format!("Loaded {} vehicle(s)", report.loaded));
    }
    if report.is_clean() {
        return notices;
    }

    if let Some(ref unavailable) = report.unavailable {
        notices.push(format!("Note: {}, starting with an empty catalog", unavailable));
    }
    for skipped in &report.skipped {
        notices.push(format!("Warning: skipped record: {}", skipped));
    }
    notices
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuelcost_types::CatalogError;

    fn report(unavailable: Option<CatalogError>, skipped: Vec<CatalogError>) -> LoadReport {
        let loaded = if unavailable.is_some() { 0 } else { 3 };
        LoadReport {
            unavailable,
            skipped,
            loaded,
        }
    }

    #[test]
    fn test_clean_load_is_quiet() {
        assert!(load_notices(&report(None, Vec::new()), false).is_empty());
        assert_eq!(
            load_notices(&report(None, Vec::new()), true),
            vec!["Loaded 3 vehicle(s)".to_string()]
        );
    }

    #[test]
    fn test_skipped_records_are_warned() {
        let skipped = vec![CatalogError::DuplicateName("bmw".to_string())];
        let notices = load_notices(&report(None, skipped), false);
        assert_eq!(
            notices,
            vec!["Warning: skipped record: Vehicle already exists: bmw".to_string()]
        );
    }

    #[test]
    fn test_unavailable_store_noted_without_verbose() {
        let unavailable = CatalogError::StoreUnavailable("cars.csv: not found".to_string());
        let notices = load_notices(&report(Some(unavailable), Vec::new()), true);
        assert_eq!(notices.len(), 1);
        assert!(notices[0].starts_with("Note: Vehicle store unavailable: cars.csv"));
        assert!(notices[0].ends_with("starting with an empty catalog"));
    }
}
