//! Route quoting service

use serde::Serialize;

use fuelcost_types::{Error, Result};

use crate::model::{Route, Vehicle};
use crate::service::cost_model::{cost, ensure_fuel_price, fuel_consumption, is_over_threshold};

/// Price and warning threshold shared by a batch of quotes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteParams {
    pub fuel_price: f64,
    pub threshold: f64,
}

impl QuoteParams {
    pub fn new(fuel_price: f64, threshold: f64) -> Result<Self> {
        ensure_fuel_price(fuel_price)?;
        if !threshold.is_finite() {
            return Err(Error::InvalidInput(format!(
                "cost threshold must be a finite number, got {}",
                threshold
            )));
        }
        Ok(Self {
            fuel_price,
            threshold,
        })
    }
}

/// Cost of one route for one vehicle
#[derive(Debug, Clone, Serialize)]
pub struct RouteQuote {
    pub route: Route,
    pub route_name: &'static str,
    pub distance: f64,
    pub fuel_consumption: f64,
    pub cost: f64,
    pub over_threshold: bool,
}

/// Costs of a set of routes for one vehicle
#[derive(Debug, Clone, Serialize)]
pub struct VehicleQuote {
    pub vehicle_name: String,
    pub efficiency: f64,
    pub routes: Vec<RouteQuote>,
}

impl VehicleQuote {
    pub fn over_threshold_count(&self) -> usize {
        self.routes.iter().filter(|r| r.over_threshold).count()
    }

    /// The route with the lowest cost
    pub fn cheapest(&self) -> Option<&RouteQuote> {
        self.routes.iter().min_by(|a, b| a.cost.total_cmp(&b.cost))
    }
}

pub fn quote_route(route: Route, efficiency: f64, params: QuoteParams) -> Result<RouteQuote> {
    let fuel = fuel_consumption(route, efficiency)?;
    let cost = cost(route, efficiency, params.fuel_price)?;
    Ok(RouteQuote {
        route,
        route_name: route.name(),
        distance: route.distance(),
        fuel_consumption: fuel,
        cost,
        over_threshold: is_over_threshold(cost, params.threshold),
    })
}

/// Quote a raw efficiency value over the given routes
pub fn quote_efficiency(
    vehicle_name: &str,
    efficiency: f64,
    routes: &[Route],
    params: QuoteParams,
) -> Result<VehicleQuote> {
    let routes = routes
        .iter()
        .map(|&route| quote_route(route, efficiency, params))
        .collect::<Result<Vec<_>>>()?;

    Ok(VehicleQuote {
        vehicle_name: vehicle_name.to_string(),
        efficiency,
        routes,
    })
}

pub fn quote_vehicle(
    vehicle: &Vehicle,
    routes: &[Route],
    params: QuoteParams,
) -> Result<VehicleQuote> {
    quote_efficiency(vehicle.name(), vehicle.efficiency(), routes, params)
}

/// Quote every vehicle, keeping the fleet order
pub fn quote_fleet(
    vehicles: &[Vehicle],
    routes: &[Route],
    params: QuoteParams,
) -> Result<Vec<VehicleQuote>> {
    vehicles
        .iter()
        .map(|v| quote_vehicle(v, routes, params))
        .collect()
}

pub fn generate_cost_report(quotes: &[VehicleQuote], params: QuoteParams) -> String {
    let route_count: usize = quotes.iter().map(|q| q.routes.len()).sum();
    let over_count: usize = quotes.iter().map(|q| q.over_threshold_count()).sum();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                 Fuel Cost Report                 \n");
    report.push_str("==================================================\n\n");
    report.push_str(&format!("  Fuel price:       ${:.2}\n", params.fuel_price));
    report.push_str(&format!("  Cost threshold:   ${:.2}\n\n", params.threshold));

    for quote in quotes {
        report.push_str(&format!(
            "{} (efficiency {})\n",
            capitalize(&quote.vehicle_name),
            quote.efficiency
        ));
        report.push_str("-".repeat(50).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<14} {:>10} {:>10} {:>11}\n",
            "Route", "Distance", "Fuel", "Cost"
        ));
        for route in &quote.routes {
            report.push_str(&format!(
                "{:<14} {:>10.1} {:>10.2} {:>11}{}\n",
                route.route_name,
                route.distance,
                route.fuel_consumption,
                format!("${:.2}", route.cost),
                if route.over_threshold { "  !" } else { "" }
            ));
        }
        for route in quote.routes.iter().filter(|r| r.over_threshold) {
            report.push_str(&format!(
                "  WARNING: driving via {} costs over ${:.2}\n",
                route.route_name.to_lowercase(),
                params.threshold
            ));
        }
        if quote.routes.len() > 1 {
            if let Some(cheapest) = quote.cheapest() {
                report.push_str(&format!(
                    "  Cheapest route: {} (${:.2})\n",
                    cheapest.route_name.to_lowercase(),
                    cheapest.cost
                ));
            }
        }
        report.push('\n');
    }

    report.push_str("Summary\n");
    report.push_str(&format!("  Vehicles:         {}\n", quotes.len()));
    report.push_str(&format!("  Routes quoted:    {}\n", route_count));
    report.push_str(&format!("  Over threshold:   {}\n", over_count));
    report.push_str("==================================================\n");
    report
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
