//! Error types for filter conversion

use std::fmt;

/// Errors raised when a persisted filter cannot become an equation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The filter's operator code is not part of the operator vocabulary
    UnknownOperator { parameter: String, operator: String },
    /// The filter carries neither `value` nor `values`
    MissingValue { parameter: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::UnknownOperator {
                parameter,
                operator,
            } => {
                write!(
                    f,
                    "Unknown operator '{}' in filter on '{}'",
                    operator, parameter
                )
            }
            ConversionError::MissingValue { parameter } => {
                write!(f, "Filter on '{}' has no value", parameter)
            }
        }
    }
}

impl std::error::Error for ConversionError {}
