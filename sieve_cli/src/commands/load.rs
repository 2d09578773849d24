use std::path::Path;

use sieve_core::{Catalog, Filter};
use sieve_search::{CatalogProvider, InteractionController, SearchConfig};

use crate::errors::CliError;
use crate::settings::read_json;
use crate::ui::{self, OutputFormat};

/// Rebuilds equations from persisted filters, as a search bar does on load.
pub async fn load_filters(
    path: &Path,
    catalog: Catalog,
    config: SearchConfig,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Loading filters");
    let filters: Vec<Filter> = read_json(path)?;

    let sink = |_: Vec<Filter>| {};
    let mut controller = InteractionController::new(CatalogProvider::new(catalog), sink, config);
    controller.sync_filters(filters).await.map_err(|e| {
        ui::error(&format!("Failed to load filters: {}", e));
        CliError::ConversionError
    })?;

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_equations(controller.equations()),
        OutputFormat::Json => ui::json_output(controller.equations()),
    }
    ui::success(&format!("Loaded {} equations", controller.equations().len()));
    Ok(())
}
