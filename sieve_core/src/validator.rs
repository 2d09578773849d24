//! Validity rules for token equations

use log::debug;

use crate::{EquationStatus, Nature, Operator, Token, TokenEquation, ValueType};

/// Default ceiling, in years, for relative durations such as "3 days".
pub const DEFAULT_MAX_RELATIVE_YEARS: u32 = 2025;

/// Units accepted after the "last" operator, with how many fit in a year.
pub const RELATIVE_TIME_UNITS: [(&str, f64); 6] = [
    ("minute", 525_600.0),
    ("hour", 8_760.0),
    ("day", 365.0),
    ("week", 52.0),
    ("month", 12.0),
    ("year", 1.0),
];

/// Assigns a status to each equation of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Validator {
    max_relative_years: u32,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            max_relative_years: DEFAULT_MAX_RELATIVE_YEARS,
        }
    }
}

impl Validator {
    pub fn new(max_relative_years: u32) -> Self {
        Self { max_relative_years }
    }

    /// Re-check every equation and return them with fresh statuses.
    ///
    /// An invalid trailing equation with fewer than three tokens is still being
    /// typed, so it is reported as waiting instead.
    pub fn verify(&self, equations: &[TokenEquation]) -> Vec<TokenEquation> {
        let count = equations.len();
        equations
            .iter()
            .enumerate()
            .map(|(index, equation)| {
                let mut status = self.status(equation);
                if index + 1 == count
                    && status == EquationStatus::Invalid
                    && equation.len() < 3
                {
                    status = EquationStatus::Waiting;
                }
                TokenEquation::new(equation.items.clone(), status)
            })
            .collect()
    }

    /// Status of one equation on its own, without the trailing-equation rule.
    pub fn status(&self, equation: &TokenEquation) -> EquationStatus {
        let valid = match equation.items.as_slice() {
            [keyword] => keyword.nature == Nature::Custom,
            [category, operator, value] => self.is_valid_triple(category, operator, value),
            _ => false,
        };
        if valid {
            EquationStatus::Valid
        } else {
            EquationStatus::Invalid
        }
    }

    fn is_valid_triple(&self, category: &Token, operator: &Token, value: &Token) -> bool {
        if category.nature != Nature::Category
            || operator.nature != Nature::Operator
            || value.nature != Nature::Value
        {
            return false;
        }

        // Rebuilt from a persisted filter; it was checked when first created.
        if value.value_type == ValueType::Unknown {
            return true;
        }

        let op = operator.label.as_single().and_then(Operator::from_label);
        match category.value_type {
            ValueType::String => {
                op.is_some_and(|op| op.is_free_text())
                    || (operator.value_type == ValueType::String
                        && value.value_type == ValueType::String)
            }
            ValueType::Number => {
                operator.value_type == ValueType::Number
                    && value.value_type == ValueType::Number
                    && value.label.parts().iter().all(|part| is_finite_number(part))
            }
            ValueType::Boolean => {
                operator.value_type == ValueType::Boolean
                    && (value.label.is("true") || value.label.is("false"))
            }
            ValueType::Date => {
                let Some(text) = value.label.as_single() else {
                    return false;
                };
                match op {
                    Some(Operator::GreaterThan | Operator::LessThan) => is_date_time_prefix(text),
                    Some(Operator::Last) => self.is_relative_duration(text),
                    _ => false,
                }
            }
            ValueType::Custom | ValueType::Unknown => {
                debug!(
                    "No validation rule for category '{}' of type {}",
                    category.label, category.value_type
                );
                false
            }
        }
    }

    /// "day", or "3 days", under the configured ceiling.
    pub fn is_relative_duration(&self, text: &str) -> bool {
        if unit_per_year(text).is_some() {
            return true;
        }

        let Some((count, unit)) = text.split_once(' ') else {
            return false;
        };
        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let Ok(count) = count.parse::<u64>() else {
            return false;
        };
        let Some(per_year) = unit.strip_suffix('s').and_then(unit_per_year) else {
            return false;
        };

        (count as f64 / per_year) < f64::from(self.max_relative_years)
    }
}

fn unit_per_year(unit: &str) -> Option<f64> {
    RELATIVE_TIME_UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, per_year)| *per_year)
}

fn is_finite_number(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Whether `text` starts with `YYYY-MM-DDTHH:MM:SS`.
///
/// Only the shape is checked, not the calendar.
pub fn is_date_time_prefix(text: &str) -> bool {
    const SHAPE: &[u8; 19] = b"dddd-dd-ddTdd:dd:dd";

    text.as_bytes().get(..19).is_some_and(|prefix| {
        prefix.iter().zip(SHAPE).all(|(byte, expected)| match *expected {
            b'd' => byte.is_ascii_digit(),
            separator => *byte == separator,
        })
    })
}

/// Verify equations with the default rules.
pub fn verify_equations(equations: &[TokenEquation]) -> Vec<TokenEquation> {
    Validator::default().verify(equations)
}
