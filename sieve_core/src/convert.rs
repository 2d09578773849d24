//! Conversion between token equations and persisted filters

use log::warn;

use crate::{ConversionError, EquationStatus, Filter, Label, Operator, Token, TokenEquation, ValueType};

/// Filters for every complete, valid equation, in input order.
///
/// Keywords, incomplete and invalid equations produce no filter.
pub fn equations_to_filters(equations: &[TokenEquation]) -> Vec<Filter> {
    equations.iter().filter_map(equation_to_filter).collect()
}

/// Filter for one equation, if it is a valid `[category, operator, value]` triple.
pub fn equation_to_filter(equation: &TokenEquation) -> Option<Filter> {
    if !equation.is_valid() {
        return None;
    }
    let (category, operator, value) = equation.triple()?;

    let Some(op) = operator.label.as_single().and_then(Operator::from_label) else {
        warn!(
            "Skipping equation on '{}': operator '{}' has no filter code",
            category.label, operator.label
        );
        return None;
    };

    let parameter = category.label.as_text();
    let filter = if op.is_set() {
        let values = value
            .label
            .parts()
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
        Filter::multi(parameter, op.code(), values)
    } else {
        Filter::single(parameter, op.code(), value.label.as_text())
    };
    Some(filter)
}

/// Placeholder equation for a persisted filter.
///
/// Every token starts out with the [`ValueType::Unknown`] type and the
/// equation is marked valid; real types are looked up afterwards. Fails if
/// the operator code is outside the vocabulary.
pub fn filter_to_equation(filter: &Filter) -> Result<TokenEquation, ConversionError> {
    let op = Operator::from_code(&filter.operator).ok_or_else(|| {
        ConversionError::UnknownOperator {
            parameter: filter.parameter.clone(),
            operator: filter.operator.clone(),
        }
    })?;

    let label = match (&filter.values, &filter.value) {
        (Some(values), _) if op.is_set() => Label::Multi(values.clone()),
        (_, Some(value)) if op.is_set() => Label::Multi(vec![value.clone()]),
        (_, Some(value)) => Label::Single(value.clone()),
        (Some(values), None) => Label::Single(values.join(", ")),
        (None, None) => {
            return Err(ConversionError::MissingValue {
                parameter: filter.parameter.clone(),
            });
        }
    };

    Ok(TokenEquation::new(
        vec![
            Token::category(filter.parameter.as_str(), ValueType::Unknown),
            Token::operator(op.label(), ValueType::Unknown),
            Token::value(label, ValueType::Unknown),
        ],
        EquationStatus::Valid,
    ))
}
