//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::records::Species;
use crate::view::SortDirection;

#[derive(Parser, Debug)]
#[command(name = "sitterview")]
#[command(about = "Browse pet-sitter and pet listings with filters, sorting and paging", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output (also honoured via NO_COLOR)
    #[arg(long = "plain", global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List sitters from a JSON file
    Sitters(SittersArgs),

    /// List pets from a JSON file
    Pets(PetsArgs),
}

/// Options shared by every listing command.
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// JSON file containing an array of records
    pub file: PathBuf,

    /// Case-insensitive substring search
    #[arg(short = 's', long)]
    pub search: Option<String>,

    /// Sort key (relevance, price, rating, name, location, age, newest)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction
    #[arg(long)]
    pub direction: Option<SortDirection>,

    /// Page number, starting at 1
    #[arg(short = 'p', long, default_value_t = 1)]
    pub page: usize,

    /// Records per page (defaults to the configured page size)
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Configuration file (defaults to the nearest .sitterview.toml)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SittersArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Minimum nightly price
    #[arg(long = "min-price")]
    pub min_price: Option<f64>,

    /// Maximum nightly price
    #[arg(long = "max-price")]
    pub max_price: Option<f64>,

    /// Minimum rating
    #[arg(long = "min-rating")]
    pub min_rating: Option<f64>,

    /// Required specialty tag
    #[arg(long)]
    pub specialty: Option<String>,

    /// Only sitters accepting this species
    #[arg(long)]
    pub species: Option<Species>,

    /// Only sitters currently available
    #[arg(long)]
    pub available: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PetsArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Only pets of this species
    #[arg(long)]
    pub species: Option<Species>,

    /// Maximum age in years
    #[arg(long = "max-age")]
    pub max_age: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
