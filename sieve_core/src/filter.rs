//! Persisted filter representation

use serde::{Deserialize, Serialize};

/// Flat form of one `[category, operator, value]` equation.
///
/// `operator` holds the internal operator code. Set operators carry their
/// operands in `values`, all others in `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub parameter: String,
    pub operator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Filter {
    /// A filter with a single operand.
    pub fn single(
        parameter: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            parameter: parameter.into(),
            operator: operator.into(),
            value: Some(value.into()),
            values: None,
        }
    }

    /// A filter with a list of operands.
    pub fn multi(
        parameter: impl Into<String>,
        operator: impl Into<String>,
        values: Vec<String>,
    ) -> Self {
        Self {
            parameter: parameter.into(),
            operator: operator.into(),
            value: None,
            values: Some(values),
        }
    }
}
