//! Domain services

pub mod cost_model;
pub mod route_report;

pub use cost_model::{cost, fuel_consumption, is_over_threshold};
pub use route_report::{
    generate_cost_report, quote_efficiency, quote_fleet, quote_vehicle, QuoteParams, RouteQuote,
    VehicleQuote,
};
