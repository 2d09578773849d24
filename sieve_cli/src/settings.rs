//! Loads the catalog and search configuration for a command.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;

use sieve_core::Catalog;
use sieve_core::defaults::job_catalog;
use sieve_search::SearchConfig;

use crate::cli::SieveCli;
use crate::errors::CliError;
use crate::ui;

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|e| {
        ui::error(&format!("Failed to read {}: {}", path.display(), e));
        CliError::InputError
    })?;
    serde_json::from_str(&text).map_err(|e| {
        ui::error(&format!("Failed to parse {}: {}", path.display(), e));
        CliError::InputError
    })
}

pub fn load_catalog(cli: &SieveCli) -> Result<Catalog, CliError> {
    match &cli.catalog {
        Some(path) => {
            ui::debug(&format!("Loading catalog from {}", path.display()));
            read_json(path)
        }
        None => Ok(job_catalog()),
    }
}

/// Configuration file values, overridden by command line flags.
pub fn load_config(cli: &SieveCli) -> Result<SearchConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => read_json(path)?,
        None => SearchConfig::default(),
    };

    if cli.no_keyword_search {
        config = config.with_key_word_search(false);
    }
    if let Some(delay) = cli.delay_ms {
        config = config.with_auto_apply_delay(Duration::from_millis(delay));
    }
    if let Some(years) = cli.max_relative_years {
        config = config.with_max_relative_years(years);
    }
    Ok(config)
}
