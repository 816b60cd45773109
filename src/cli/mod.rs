use clap::{ Parser, Subcommand, ValueEnum };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "property-registry",
    about = "A role-gated ledger of property types, locations, and rental listings",
    version,
    author,
    long_about = None
)]
pub struct RegistryCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a YAML script of operations against the registry
    Run {
        /// Path to the operations script
        #[arg(short, long)]
        script: PathBuf,

        /// Registry snapshot to start from (a fresh registry when omitted)
        #[arg(long)]
        state: Option<PathBuf>,

        /// Write the resulting state back to --state
        #[arg(long, default_value = "false", requires = "state")]
        save: bool,
    },

    /// Search properties in a registry snapshot
    Search {
        /// Registry snapshot to search
        #[arg(long)]
        state: PathBuf,

        #[arg(long)]
        property_type: Option<u64>,

        #[arg(long)]
        location: Option<u64>,

        /// Exact number of bedrooms
        #[arg(long, conflicts_with_all = ["min_bedrooms", "max_bedrooms"])]
        bedrooms: Option<u32>,

        #[arg(long)]
        min_bedrooms: Option<u32>,

        #[arg(long)]
        max_bedrooms: Option<u32>,

        #[arg(long)]
        min_bathrooms: Option<u32>,

        #[arg(long)]
        max_bathrooms: Option<u32>,

        #[arg(long)]
        min_rent: Option<u64>,

        #[arg(long)]
        max_rent: Option<u64>,

        #[arg(long)]
        income_restricted: Option<bool>,

        #[arg(long)]
        accessibility_features: Option<bool>,

        /// Listing status (available, unavailable, pending, maintenance)
        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        owner: Option<String>,
    },

    /// Show a single record from a registry snapshot
    Show {
        /// Registry snapshot to read
        #[arg(long)]
        state: PathBuf,

        /// Kind of record
        #[arg(value_enum)]
        kind: RecordKind,

        /// Record id
        id: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Property,
    Type,
    Location,
}
