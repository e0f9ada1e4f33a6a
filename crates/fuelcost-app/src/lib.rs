//! Application service layer - use cases, config, constants

pub mod app;
pub mod config;
pub mod constants;
pub mod repository;
