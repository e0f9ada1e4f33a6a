//! Command handlers

use crate::cli::{Cli, Commands, OutputFormat};
use crate::output::{output_quotes, output_routes, output_vehicles, report_load};
use fuelcost_app::app::{
    quote_all, quote_named, register_vehicle, seed_default_fleet, select_routes,
};
use fuelcost_app::config::Config;
use fuelcost_app::repository::open_catalog;
use fuelcost_domain::model::Route;
use fuelcost_domain::service::{quote_efficiency, QuoteParams, VehicleQuote};
use fuelcost_store::VehicleCatalog;
use fuelcost_types::{Error, Result};
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Quote {
            vehicle,
            efficiency,
            route,
        } => {
            let config = effective_config(&cli)?;
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_quote(
                &cli,
                &config,
                vehicle.as_deref(),
                *efficiency,
                *route,
                output_format,
            )
        }

        Commands::QuoteAll { route } => {
            let config = effective_config(&cli)?;
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_quote_all(&cli, &config, *route, output_format)
        }

        Commands::Routes => {
            let config = effective_config(&cli)?;
            output_routes(cli.format.unwrap_or(config.output_format))
        }

        Commands::List => {
            let config = effective_config(&cli)?;
            let output_format = cli.format.unwrap_or(config.output_format);
            let catalog = load_catalog(&cli, &config)?;
            output_vehicles(output_format, catalog.all())
        }

        Commands::Add { name, efficiency } => {
            let config = effective_config(&cli)?;
            cmd_add(&cli, &config, name, *efficiency)
        }

        Commands::Seed => {
            let config = effective_config(&cli)?;
            cmd_seed(&cli, &config)
        }

        // Edits the stored file, so CLI overrides are not applied and a
        // broken config can still be reset
        Commands::Config {
            show,
            set_price,
            set_threshold,
            set_store,
            set_output,
            reset,
        } => cmd_config(
            *show,
            *set_price,
            *set_threshold,
            set_store.clone(),
            *set_output,
            *reset,
        ),
    }
}

/// Load config and apply CLI overrides
fn effective_config(cli: &Cli) -> Result<Config> {
    Ok(apply_overrides(cli, Config::load()?))
}

fn apply_overrides(cli: &Cli, mut config: Config) -> Config {
    if let Some(ref store) = cli.store {
        config.store_path = Some(store.clone());
    }
    if let Some(price) = cli.price {
        config.fuel_price = price;
    }
    if let Some(threshold) = cli.threshold {
        config.cost_threshold = threshold;
    }
    config
}

fn load_catalog(cli: &Cli, config: &Config) -> Result<VehicleCatalog> {
    let (catalog, report) = open_catalog(config)?;
    if cli.verbose {
        eprintln!("Vehicle store: {}", catalog.store_path().display());
    }
    report_load(&report, cli.verbose);
    Ok(catalog)
}

fn cmd_quote(
    cli: &Cli,
    config: &Config,
    vehicle: Option<&str>,
    efficiency: Option<f64>,
    route: Option<Route>,
    output_format: OutputFormat,
) -> Result<()> {
    let params = config.quote_params()?;
    let routes = select_routes(route);

    let quote = match (vehicle, efficiency) {
        (_, Some(efficiency)) => quote_efficiency("custom", efficiency, &routes, params)?,
        (Some(name), None) => {
            let catalog = load_catalog(cli, config)?;
            quote_named(&catalog, name, &routes, params)?
        }
        (None, None) => {
            return Err(Error::InvalidInput(
                "a vehicle name or --efficiency is required".to_string(),
            ))
        }
    };

    let quotes = [quote];
    output_quotes(output_format, &quotes, params)?;
    warn_over_threshold(&quotes, params, output_format);
    Ok(())
}

fn cmd_quote_all(
    cli: &Cli,
    config: &Config,
    route: Option<Route>,
    output_format: OutputFormat,
) -> Result<()> {
    let params = config.quote_params()?;
    let routes = select_routes(route);
    let catalog = load_catalog(cli, config)?;

    if catalog.is_empty() {
        println!(
            "No vehicles in the catalog. \
             Add some with: fuelcost add <name> <efficiency> or fuelcost seed"
        );
        return Ok(());
    }

    let quotes = quote_all(&catalog, &routes, params)?;
    output_quotes(output_format, &quotes, params)?;
    warn_over_threshold(&quotes, params, output_format);
    Ok(())
}

/// The table report already lists warnings; JSON output gets a stderr summary
fn warn_over_threshold(
    quotes: &[VehicleQuote],
    params: QuoteParams,
    output_format: OutputFormat,
) {
    if output_format != OutputFormat::Json {
        return;
    }
    let over_count: usize = quotes.iter().map(|q| q.over_threshold_count()).sum();
    if over_count > 0 {
        eprintln!(
            "Warning: {} route(s) cost more than ${:.2}",
            over_count, params.threshold
        );
    }
}

fn cmd_add(cli: &Cli, config: &Config, name: &str, efficiency: f64) -> Result<()> {
    let mut catalog = load_catalog(cli, config)?;
    let vehicle = register_vehicle(&mut catalog, name, efficiency)?;
    println!(
        "Added {} (efficiency {}) to {}",
        vehicle.name(),
        vehicle.efficiency(),
        catalog.store_path().display()
    );
    Ok(())
}

fn cmd_seed(cli: &Cli, config: &Config) -> Result<()> {
    let mut catalog = load_catalog(cli, config)?;
    let summary = seed_default_fleet(&mut catalog)?;

    println!("Added {} vehicle(s)", summary.added.len());
    if cli.verbose {
        for name in &summary.added {
            eprintln!("  + {}", name);
        }
        for name in &summary.already_present {
            eprintln!("  = {} (already present)", name);
        }
    }
    Ok(())
}

fn cmd_config(
    show: bool,
    set_price: Option<f64>,
    set_threshold: Option<f64>,
    set_store: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(price) = set_price {
        config.fuel_price = price;
        modified = true;
    }

    if let Some(threshold) = set_threshold {
        config.cost_threshold = threshold;
        modified = true;
    }

    if let Some(store) = set_store {
        config.store_path = Some(store);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
