use std::path::Path;

use sieve_core::{TokenEquation, Validator, equations_to_filters};
use sieve_search::SearchConfig;

use crate::errors::CliError;
use crate::settings::read_json;
use crate::ui::{self, OutputFormat};

/// Re-validates equations stored in a file and prints their statuses.
pub fn verify_file(
    path: &Path,
    config: &SearchConfig,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Verifying equations");
    let equations: Vec<TokenEquation> = read_json(path)?;

    let validator = Validator::new(config.max_relative_years);
    let verified = validator.verify(&equations);
    let valid = verified.iter().filter(|eq| eq.is_valid()).count();

    match output_format {
        OutputFormat::Pretty => {
            ui::pretty_output_equations(&verified);
            ui::pretty_output_filters(&equations_to_filters(&verified));
        }
        OutputFormat::Json => ui::json_output(&verified),
    }

    if valid == verified.len() {
        ui::success(&format!("All {} equations are valid", valid));
        Ok(())
    } else {
        ui::warning(&format!("{} of {} equations are valid", valid, verified.len()));
        Err(CliError::IncompleteSearch)
    }
}
