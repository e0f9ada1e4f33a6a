//! Fuelcost - route fuel cost calculator
//!
//! A CLI tool that estimates what a vehicle spends on fuel over fixed routes.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
