//! Configuration management for fuelcost
//!
//! Config stored at: ~/.config/fuelcost/config.json

use fuelcost_domain::service::QuoteParams;
use fuelcost_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_COST_THRESHOLD, DEFAULT_FUEL_PRICE};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Vehicle store file override (optional)
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Fuel price per fuel unit
    #[serde(default = "default_fuel_price")]
    pub fuel_price: f64,

    /// Route costs above this are flagged
    #[serde(default = "default_cost_threshold")]
    pub cost_threshold: f64,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_fuel_price() -> f64 {
    DEFAULT_FUEL_PRICE
}

fn default_cost_threshold() -> f64 {
    DEFAULT_COST_THRESHOLD
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            fuel_price: default_fuel_price(),
            cost_threshold: default_cost_threshold(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fuelcost");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the vehicle store path
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.store_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fuelcost");
        Ok(data_dir.join("cars.csv"))
    }

    /// Price and threshold as validated quote parameters
    pub fn quote_params(&self) -> Result<QuoteParams> {
        self.validate()?;
        QuoteParams::new(self.fuel_price, self.cost_threshold)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.fuel_price.is_finite() || self.fuel_price < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fuel_price must be zero or positive, got {}",
                self.fuel_price
            ))
            .into());
        }
        if !self.cost_threshold.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "cost_threshold must be finite, got {}",
                self.cost_threshold
            ))
            .into());
        }
        Ok(())
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fuelcost Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Vehicle store:  {}",
            self.store_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Fuel price:     {:.2}", self.fuel_price)?;
        writeln!(f, "Cost threshold: {:.2}", self.cost_threshold)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuelcost_types::Error;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!((config.fuel_price - 1.48).abs() < f64::EPSILON);
        assert!((config.cost_threshold - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            store_path: Some(PathBuf::from("/tmp/cars.csv")),
            fuel_price: 1.9,
            cost_threshold: 250.0,
            output_format: OutputFormat::Json,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "fuel_price": 2.0 }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!((config.fuel_price - 2.0).abs() < f64::EPSILON);
        assert!((config.cost_threshold - 400.0).abs() < f64::EPSILON);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.store_path.is_none());
    }

    #[test]
    fn test_rejects_negative_price() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "fuel_price": -1.0 }"#).unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_store_path_override() {
        let config = Config {
            store_path: Some(PathBuf::from("cars.csv")),
            ..Config::default()
        };
        assert_eq!(config.store_path().unwrap(), PathBuf::from("cars.csv"));
    }

    #[test]
    fn test_quote_params() {
        let params = Config::default().quote_params().unwrap();
        assert!((params.fuel_price - 1.48).abs() < f64::EPSILON);
        assert!((params.threshold - 400.0).abs() < f64::EPSILON);
    }
}
