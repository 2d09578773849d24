//! Rebuilding equations from persisted filters

use log::debug;

use sieve_core::{ConversionError, Filter, TokenEquation, filter_to_equation};

use crate::provider::{SuggestionParams, SuggestionProvider, fetch_or_empty};

/// Turn persisted filters back into valid equations.
///
/// Tokens start with the unknown type. Categories and operators get their
/// real type from the provider where it offers a matching entry, and the
/// value suggestions are cached on the operator and value tokens for later
/// editing. Failed or empty provider answers leave the placeholder types.
pub async fn filters_to_equations<P: SuggestionProvider>(
    filters: &[Filter],
    provider: &P,
) -> Result<Vec<TokenEquation>, ConversionError> {
    let mut equations = Vec::with_capacity(filters.len());
    for filter in filters {
        let mut equation = filter_to_equation(filter)?;
        resolve_types(&mut equation, provider).await;
        equations.push(equation);
    }
    debug!("Rehydrated {} equations", equations.len());
    Ok(equations)
}

async fn resolve_types<P: SuggestionProvider>(equation: &mut TokenEquation, provider: &P) {
    let categories = fetch_or_empty(provider, SuggestionParams::default()).await;
    if let Some(category) = equation.items.first_mut() {
        if let Some(found) = categories.find(&category.label.as_text()) {
            category.value_type = found.value_type;
            category.hide_suggestion = found.hide_suggestion;
        }
    }

    let Some(category) = equation.items.first().cloned() else {
        return;
    };
    let operators = fetch_or_empty(
        provider,
        SuggestionParams::after(category, equation.clone()),
    )
    .await;
    if let Some(operator) = equation.items.get_mut(1) {
        if let Some(found) = operators.find(&operator.label.as_text()) {
            operator.value_type = found.value_type;
        }
    }

    let Some(operator) = equation.items.get(1).cloned() else {
        return;
    };
    let values = fetch_or_empty(provider, SuggestionParams::after(operator, equation.clone())).await;
    for token in equation.items.iter_mut().skip(1) {
        token.suggestions = Some(values.clone());
    }
}
