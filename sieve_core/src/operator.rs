//! Operator vocabulary shared by validation and filter conversion

use std::fmt;

use crate::ValueType;

/// Comparison operators a search equation can use.
///
/// Each operator has an internal code, used in persisted filters, and a
/// display label, used as the text of operator tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    In,
    NotIn,
    Like,
    Last,
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::In,
        Operator::NotIn,
        Operator::Like,
        Operator::Last,
    ];

    /// Code stored in a [`crate::Filter`].
    pub fn code(&self) -> &'static str {
        match self {
            Operator::Equal => "eq",
            Operator::NotEqual => "neq",
            Operator::GreaterThan => "gt",
            Operator::LessThan => "lt",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::Like => "like",
            Operator::Last => "last",
        }
    }

    /// Text shown on operator tokens.
    pub fn label(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => "greater than",
            Operator::LessThan => "less than",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::Like => "like",
            Operator::Last => "last",
        }
    }

    pub fn from_code(code: &str) -> Option<Operator> {
        Self::ALL.into_iter().find(|op| op.code() == code)
    }

    pub fn from_label(label: &str) -> Option<Operator> {
        Self::ALL.into_iter().find(|op| op.label() == label)
    }

    /// Operators whose operand is a list of values.
    pub fn is_set(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    /// Contains-style operators matching arbitrary text.
    pub fn is_free_text(&self) -> bool {
        matches!(self, Operator::Like)
    }

    /// Operators whose operand is typed rather than picked from a list.
    pub fn accepts_typed_value(&self) -> bool {
        matches!(
            self,
            Operator::Like | Operator::GreaterThan | Operator::LessThan | Operator::Last
        )
    }

    /// Operators offered for a category of the given type.
    pub fn for_type(value_type: ValueType) -> &'static [Operator] {
        match value_type {
            ValueType::String => &[
                Operator::Equal,
                Operator::NotEqual,
                Operator::In,
                Operator::NotIn,
                Operator::Like,
            ],
            ValueType::Number => &[
                Operator::Equal,
                Operator::NotEqual,
                Operator::GreaterThan,
                Operator::LessThan,
                Operator::In,
                Operator::NotIn,
            ],
            ValueType::Boolean => &[Operator::Equal, Operator::NotEqual],
            ValueType::Date => &[Operator::GreaterThan, Operator::LessThan, Operator::Last],
            ValueType::Custom | ValueType::Unknown => &[],
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_and_label_lookup_agree() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_code(op.code()), Some(op));
            assert_eq!(Operator::from_label(op.label()), Some(op));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Operator::from_code("between"), None);
        assert_eq!(Operator::from_label("eq"), None);
    }

    #[test]
    fn test_set_operators() {
        assert!(Operator::In.is_set());
        assert!(Operator::NotIn.is_set());
        assert!(!Operator::Equal.is_set());
    }

    #[test]
    fn test_date_operators() {
        assert_eq!(
            Operator::for_type(ValueType::Date),
            &[Operator::GreaterThan, Operator::LessThan, Operator::Last]
        );
        assert!(Operator::for_type(ValueType::Unknown).is_empty());
    }
}
