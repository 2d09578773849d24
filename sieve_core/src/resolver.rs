//! Nature and type resolution for typed input

use log::debug;

use crate::token::split_parts;
use crate::{Nature, Operator, Suggestions, Token, ValueType};

/// Role and type assigned to a new token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMeta {
    pub nature: Nature,
    pub value_type: ValueType,
}

impl TokenMeta {
    pub fn new(nature: Nature, value_type: ValueType) -> Self {
        Self { nature, value_type }
    }
}

/// Work out what `value` is, given the current suggestions and the token before it.
///
/// An exact suggestion match wins. After an operator, typed input becomes a
/// VALUE when nothing can be listed (no suggestions, or an operator such as
/// "like" that takes arbitrary input), and CUSTOM when the user typed
/// something outside the offered list. Set operators accept a `,` or `|`
/// separated list only if every part is offered. Anything else is a keyword.
pub fn resolve_token_meta(
    value: &str,
    suggestions: &Suggestions,
    previous: Option<&Token>,
) -> TokenMeta {
    let inherited = previous.map_or(ValueType::Custom, |token| token.value_type);
    let previous_operator = previous.filter(|token| token.nature == Nature::Operator);
    let operator = previous_operator
        .and_then(|token| token.label.as_single())
        .and_then(Operator::from_label);

    if operator.is_some_and(|op| op.is_set()) {
        let parts = split_parts(value);
        let meta = if suggestions.is_empty() {
            TokenMeta::new(Nature::Value, inherited)
        } else if parts.iter().all(|part| suggestions.contains(part)) {
            let value_type = parts
                .first()
                .and_then(|part| suggestions.find(part))
                .map_or(inherited, |found| found.value_type);
            TokenMeta::new(Nature::Value, value_type)
        } else {
            TokenMeta::new(Nature::Custom, inherited)
        };
        debug!("Resolved set operand '{}' as {}", value, meta.nature);
        return meta;
    }

    if let Some(found) = suggestions.find(value) {
        return TokenMeta::new(found.nature, found.value_type);
    }

    if previous_operator.is_some() {
        let typed = operator.is_some_and(|op| op.accepts_typed_value());
        return if suggestions.is_empty() || typed {
            TokenMeta::new(Nature::Value, inherited)
        } else {
            debug!("'{}' is not among the offered values", value);
            TokenMeta::new(Nature::Custom, inherited)
        };
    }

    TokenMeta::new(Nature::Custom, inherited)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Suggestions {
        Suggestions::new()
            .with_item("Status", Nature::Category, ValueType::String)
            .with_item("UserPriority", Nature::Category, ValueType::Number)
    }

    fn statuses() -> Suggestions {
        Suggestions::new()
            .with_item("Running", Nature::Value, ValueType::String)
            .with_item("Done", Nature::Value, ValueType::String)
    }

    fn op(label: &str, value_type: ValueType) -> Token {
        Token::operator(label, value_type)
    }

    // ===== Exact matches =====

    #[test]
    fn test_exact_category_match() {
        let meta = resolve_token_meta("UserPriority", &categories(), None);
        assert_eq!(meta, TokenMeta::new(Nature::Category, ValueType::Number));
    }

    #[test]
    fn test_exact_value_match_after_operator() {
        let previous = op("=", ValueType::String);
        let meta = resolve_token_meta("Done", &statuses(), Some(&previous));
        assert_eq!(meta, TokenMeta::new(Nature::Value, ValueType::String));
    }

    // ===== Free input =====

    #[test]
    fn test_unmatched_without_context_is_keyword() {
        let meta = resolve_token_meta("needle", &categories(), None);
        assert_eq!(meta, TokenMeta::new(Nature::Custom, ValueType::Custom));
    }

    #[test]
    fn test_empty_suggestions_without_operator_is_keyword() {
        let meta = resolve_token_meta("needle", &Suggestions::new(), None);
        assert_eq!(meta, TokenMeta::new(Nature::Custom, ValueType::Custom));
    }

    #[test]
    fn test_empty_suggestions_after_operator_is_value() {
        let previous = op("=", ValueType::Number);
        let meta = resolve_token_meta("5", &Suggestions::new(), Some(&previous));
        assert_eq!(meta, TokenMeta::new(Nature::Value, ValueType::Number));
    }

    #[test]
    fn test_unlisted_value_after_equal_is_custom() {
        let previous = op("=", ValueType::String);
        let meta = resolve_token_meta("Stalled", &statuses(), Some(&previous));
        assert_eq!(meta, TokenMeta::new(Nature::Custom, ValueType::String));
    }

    #[test]
    fn test_free_text_operator_accepts_anything() {
        let previous = op("like", ValueType::String);
        let meta = resolve_token_meta("Run", &statuses(), Some(&previous));
        assert_eq!(meta, TokenMeta::new(Nature::Value, ValueType::String));
    }

    #[test]
    fn test_relative_time_accepts_typed_duration() {
        let previous = op("last", ValueType::Date);
        let units = Suggestions::new().with_item("day", Nature::Value, ValueType::Date);
        let meta = resolve_token_meta("2 days", &units, Some(&previous));
        assert_eq!(meta, TokenMeta::new(Nature::Value, ValueType::Date));
    }

    #[test]
    fn test_type_inherited_from_non_operator_previous() {
        let previous = Token::value("Done", ValueType::String);
        let meta = resolve_token_meta("foo", &statuses(), Some(&previous));
        assert_eq!(meta, TokenMeta::new(Nature::Custom, ValueType::String));
    }

    // ===== Set operators =====

    #[test]
    fn test_set_operand_all_parts_offered() {
        let previous = op("in", ValueType::String);
        let meta = resolve_token_meta("Running | Done", &statuses(), Some(&previous));
        assert_eq!(meta, TokenMeta::new(Nature::Value, ValueType::String));
    }

    #[test]
    fn test_set_operand_with_unlisted_part() {
        let previous = op("not in", ValueType::String);
        let meta = resolve_token_meta("Running, Stalled", &statuses(), Some(&previous));
        assert_eq!(meta, TokenMeta::new(Nature::Custom, ValueType::String));
    }

    #[test]
    fn test_set_operand_without_suggestions() {
        let previous = op("in", ValueType::Number);
        let meta = resolve_token_meta("1, 2", &Suggestions::new(), Some(&previous));
        assert_eq!(meta, TokenMeta::new(Nature::Value, ValueType::Number));
    }
}
