use std::fmt;

/// Failure categories of CLI commands.
///
/// Details are reported to the user where the failure happens.
#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    InputError,
    ConversionError,
    IncompleteSearch,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputError => write!(f, "Could not read input"),
            CliError::ConversionError => write!(f, "Could not convert filters"),
            CliError::IncompleteSearch => write!(f, "Search is not complete"),
        }
    }
}

impl std::error::Error for CliError {}
