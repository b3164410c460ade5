//! # qto - Quantity Take-off CLI
//!
//! Reads a project (or a bare array of parts) from JSON and prints material
//! totals, per-part or per-type breakdowns, and priced costs.
//!
//! ```text
//! qto estimate duplex.json
//! qto by-type duplex.json --category
//! qto cost duplex.json --prices prices.toml --format json
//! qto constants --constants site.toml
//! ```

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use env_logger::Env;

fn main() {
    let cli = Cli::parse();

    // Default level, overridden by RUST_LOG
    let default_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
