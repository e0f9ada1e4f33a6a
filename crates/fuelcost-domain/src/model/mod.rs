//! Domain model types

pub mod route;
pub mod vehicle;

pub use route::Route;
pub use vehicle::Vehicle;
