use std::time::Duration;

use tokio::sync::mpsc;

use sieve_core::{Catalog, Filter, all_valid};
use sieve_search::{CatalogProvider, InteractionController, Key, SearchConfig};

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Types each token into a search bar and waits for the search to be applied.
pub async fn compose_search(
    tokens: &[String],
    catalog: Catalog,
    config: SearchConfig,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Composing search");

    let (sender, mut receiver) = mpsc::unbounded_channel::<Vec<Filter>>();
    let sink = move |filters: Vec<Filter>| {
        // The receiver outlives the controller.
        let _ = sender.send(filters);
    };
    let delay = config.auto_apply_delay();
    let mut controller = InteractionController::new(CatalogProvider::new(catalog), sink, config);

    for text in tokens {
        controller.load_suggestions().await.map_err(|e| {
            ui::error(&format!("Suggestion loading failed: {}", e));
            CliError::InputError
        })?;
        controller.set_input(text.as_str());
        if !controller.handle_key(Key::Enter) {
            ui::warning(&format!("'{}' was not accepted as a token", text));
            controller.set_input("");
        }
    }

    if output_format == OutputFormat::Pretty {
        ui::pretty_output_equations(controller.equations());
    }

    if !all_valid(controller.equations()) {
        ui::error("Search has incomplete or invalid equations; nothing applied");
        return Err(CliError::IncompleteSearch);
    }

    ui::debug(&format!("Waiting {:?} for auto-apply", delay));
    let applied = tokio::time::timeout(delay * 2, receiver.recv())
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| controller.filters());

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_filters(&applied),
        OutputFormat::Json => ui::json_output(&applied),
    }
    ui::success(&format!("Applied {} filters", applied.len()));
    Ok(())
}
