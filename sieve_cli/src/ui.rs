//! Terminal output helpers.

use std::fmt;

use clap::ValueEnum;
use console::style;
use serde::Serialize;

use sieve_core::{EquationStatus, Filter, TokenEquation};

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn header(msg: &str) {
    eprintln!("{}", style(msg).bold());
}

pub fn success(msg: &str) {
    eprintln!("{} {}", style("✓").green(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", style("!").yellow(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

pub fn debug(msg: &str) {
    log::debug!("{}", msg);
}

pub fn json_output<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error(&format!("Failed to serialize output: {}", e)),
    }
}

/// One line per equation, tokens separated by spaces.
pub fn pretty_output_equations(equations: &[TokenEquation]) {
    for (index, equation) in equations.iter().enumerate() {
        let tokens: Vec<String> = equation
            .items
            .iter()
            .map(|token| format!("{}", style(&token.label).cyan()))
            .collect();
        let status = match equation.status {
            EquationStatus::Valid => style("valid").green(),
            EquationStatus::Invalid => style("invalid").red(),
            EquationStatus::Waiting => style("waiting").yellow(),
        };
        println!("{:>3}. {} [{}]", index + 1, tokens.join(" "), status);
    }
}

pub fn pretty_output_filters(filters: &[Filter]) {
    for filter in filters {
        let operand = match (&filter.value, &filter.values) {
            (Some(value), _) => value.clone(),
            (None, Some(values)) => format!("[{}]", values.join(", ")),
            (None, None) => String::new(),
        };
        println!(
            "{} {} {}",
            style(&filter.parameter).bold(),
            filter.operator,
            operand
        );
    }
}
