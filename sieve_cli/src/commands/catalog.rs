use console::style;

use sieve_core::{Catalog, Operator};

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Prints the categories of a catalog with the operators they accept.
pub fn show_catalog(catalog: &Catalog, output_format: OutputFormat) -> Result<(), CliError> {
    match output_format {
        OutputFormat::Json => ui::json_output(catalog),
        OutputFormat::Pretty => {
            ui::header(&format!("{} categories", catalog.categories.len()));
            for category in &catalog.categories {
                let operators: Vec<&str> = Operator::for_type(category.value_type)
                    .iter()
                    .map(Operator::label)
                    .collect();
                println!(
                    "{} ({}): {}",
                    style(&category.name).bold(),
                    category.value_type,
                    operators.join(", ")
                );
                if !category.hide_suggestion && !category.values.is_empty() {
                    println!("    {}", style(category.values.join(", ")).dim());
                }
            }
        }
    }
    Ok(())
}
