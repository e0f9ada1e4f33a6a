//! Application use cases

pub mod quote_service;

pub use quote_service::{
    quote_all, quote_named, register_vehicle, seed_default_fleet, select_routes, SeedSummary,
};
