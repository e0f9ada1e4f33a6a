//! Domain layer for fuelcost: vehicles, routes, and the route cost model

pub mod model;
pub mod repository;
pub mod service;
