//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "qto")]
#[command(version)]
#[command(about = "Material take-off and cost totals for structural parts")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "table")]
    pub format: OutputFormat,

    /// TOML file overriding estimation constants
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub constants: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project-wide material totals
    Estimate {
        /// Project or parts JSON file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Materials for each part
    Parts {
        /// Project or parts JSON file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Material totals grouped by part type
    ByType {
        /// Project or parts JSON file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Group by component category instead of part type
        #[arg(long)]
        category: bool,
    },

    /// Price the project totals
    Cost {
        /// Project or parts JSON file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Price table (JSON, or TOML with a .toml extension)
        #[arg(long, short = 'p', value_hint = clap::ValueHint::FilePath)]
        prices: PathBuf,
    },

    /// Print the effective estimation constants as TOML
    Constants,
}
