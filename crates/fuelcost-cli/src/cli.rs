//! CLI definition using clap

use clap::{Parser, Subcommand};
use fuelcost_domain::model::Route;
use std::path::PathBuf;

pub use fuelcost_types::OutputFormat;

#[derive(Parser)]
#[command(name = "fuelcost")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Fuel cost estimation for vehicles over fixed routes")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vehicle store file. Uses config value if not specified.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Fuel price per fuel unit. Uses config value if not specified.
    #[arg(long, global = true)]
    pub price: Option<f64>,

    /// Flag routes costing more than this. Uses config value if not specified.
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cost of one vehicle over every route
    Quote {
        /// Vehicle name from the catalog (case-insensitive)
        #[arg(required_unless_present = "efficiency", conflicts_with = "efficiency")]
        vehicle: Option<String>,

        /// Quote a literal efficiency instead of a catalog vehicle
        #[arg(long, short = 'e', allow_negative_numbers = true)]
        efficiency: Option<f64>,

        /// Only quote this route (backroad, highway)
        #[arg(long, short = 'r', value_parser = parse_route)]
        route: Option<Route>,
    },

    /// Cost of every catalog vehicle over every route
    QuoteAll {
        /// Only quote this route (backroad, highway)
        #[arg(long, short = 'r', value_parser = parse_route)]
        route: Option<Route>,
    },

    /// List known routes
    Routes,

    /// List catalog vehicles
    List,

    /// Add a vehicle to the catalog
    Add {
        /// Vehicle name (no commas)
        name: String,

        /// Distance covered per unit of fuel
        #[arg(allow_negative_numbers = true)]
        efficiency: f64,
    },

    /// Add the built-in vehicles that are not in the catalog yet
    Seed,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set fuel price
        #[arg(long)]
        set_price: Option<f64>,

        /// Set cost threshold
        #[arg(long)]
        set_threshold: Option<f64>,

        /// Set vehicle store path
        #[arg(long)]
        set_store: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

fn parse_route(s: &str) -> Result<Route, String> {
    s.parse::<Route>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote_by_name() {
        let cli =
            Cli::try_parse_from(["fuelcost", "quote", "land rover", "-r", "highway"]).unwrap();
        match cli.command {
            Commands::Quote {
                vehicle,
                efficiency,
                route,
            } => {
                assert_eq!(vehicle.as_deref(), Some("land rover"));
                assert!(efficiency.is_none());
                assert_eq!(route, Some(Route::Highway));
            }
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn test_parse_quote_by_efficiency() {
        let cli = Cli::try_parse_from([
            "fuelcost",
            "quote",
            "--efficiency",
            "6.0",
            "--price",
            "1.5",
        ])
        .unwrap();
        assert_eq!(cli.price, Some(1.5));
        assert!(matches!(
            cli.command,
            Commands::Quote {
                vehicle: None,
                efficiency: Some(e),
                route: None,
            } if (e - 6.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn test_quote_requires_vehicle_or_efficiency() {
        assert!(Cli::try_parse_from(["fuelcost", "quote"]).is_err());
        assert!(Cli::try_parse_from(["fuelcost", "quote", "bmw", "-e", "11"]).is_err());
    }

    #[test]
    fn test_unknown_route_rejected() {
        assert!(Cli::try_parse_from(["fuelcost", "quote-all", "--route", "motorway"]).is_err());
    }

    #[test]
    fn test_parse_add_with_global_flags() {
        let cli = Cli::try_parse_from([
            "fuelcost", "add", "lotus", "4", "--store", "cars.csv", "-f", "json",
        ])
        .unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("cars.csv")));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Add { ref name, .. } if name == "lotus"));
    }
}
