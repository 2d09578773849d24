use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::ui::OutputFormat;

/// Defines the top-level interface for the Sieve CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "sieve")]
#[command(version, about = "Sieve CLI: compose and inspect search filters in the terminal.")]
pub struct SieveCli {
    /// Path to a JSON category catalog (defaults to the built-in job catalog).
    #[arg(long, global = true, env = "SIEVE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Path to a JSON search configuration file.
    #[arg(long, global = true, env = "SIEVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Refuse free-text keyword tokens.
    #[arg(long, global = true)]
    pub no_keyword_search: bool,

    /// Delay before a valid search is applied, in milliseconds.
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Ceiling for relative durations such as "3 days", in years.
    #[arg(long, global = true)]
    pub max_relative_years: Option<u32>,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: SieveCliCommand,
}

/// Defines the available subcommands of the Sieve CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum SieveCliCommand {
    /// Show the categories available for filtering.
    Catalog,
    /// Check the status of equations stored in a JSON file.
    Verify {
        /// JSON file holding a list of token equations.
        equations: PathBuf,
    },
    /// Type tokens one by one, as in a search bar, and print the applied filters.
    Compose {
        /// Token texts in typing order (e.g. Status = Running).
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    /// Rebuild equations from a JSON list of persisted filters.
    Load {
        /// JSON file holding a list of filters.
        filters: PathBuf,
    },
}
