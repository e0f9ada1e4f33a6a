//! Error types for fuelcost

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value: {0}")]
    Invalid(String),
}

/// Vehicle catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Vehicle already exists: {0}")]
    DuplicateName(String),

    #[error("Malformed record on line {line} ({content:?}): {reason}")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Vehicle store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Failed to write vehicle store: {0}")]
    StoreWrite(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_converts() {
        let err: Error = CatalogError::DuplicateName("bmw".to_string()).into();
        assert!(matches!(err, Error::Catalog(CatalogError::DuplicateName(ref n)) if n == "bmw"));
        assert_eq!(err.to_string(), "Catalog error: Vehicle already exists: bmw");
    }

    #[test]
    fn test_malformed_record_message() {
        let err = CatalogError::MalformedRecord {
            line: 3,
            content: "lotus".to_string(),
            reason: "missing efficiency".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed record on line 3 (\"lotus\"): missing efficiency"
        );
    }
}
