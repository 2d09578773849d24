//! Token equations and their validity status

use serde::{Deserialize, Serialize};

use crate::{Nature, Operator, Token};

/// Validity of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquationStatus {
    Valid,
    Invalid,
    /// Still being composed: incomplete, but not an error yet.
    Waiting,
}

/// An ordered group of tokens: one keyword, or `[category, operator, value]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenEquation {
    pub items: Vec<Token>,
    pub status: EquationStatus,
}

impl TokenEquation {
    pub fn new(items: Vec<Token>, status: EquationStatus) -> Self {
        Self { items, status }
    }

    /// A fresh equation holding one token.
    ///
    /// Keywords are complete on their own; anything else waits for more tokens.
    pub fn starting_with(token: Token) -> Self {
        let status = if token.nature == Nature::Custom {
            EquationStatus::Valid
        } else {
            EquationStatus::Waiting
        };
        Self::new(vec![token], status)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.status == EquationStatus::Valid
    }

    pub fn last_token(&self) -> Option<&Token> {
        self.items.last()
    }

    /// The `[category, operator, value]` triple, if this equation has three tokens.
    pub fn triple(&self) -> Option<(&Token, &Token, &Token)> {
        match self.items.as_slice() {
            [category, operator, value] => Some((category, operator, value)),
            _ => None,
        }
    }

    /// The vocabulary operator of this equation, if its second token names one.
    pub fn operator(&self) -> Option<Operator> {
        self.items
            .get(1)
            .filter(|token| token.nature == Nature::Operator)
            .and_then(|token| token.label.as_single())
            .and_then(Operator::from_label)
    }
}

/// Position of one token: which equation, and which token inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquationAndTokenIndex {
    pub equation_index: usize,
    pub token_index: usize,
}

impl EquationAndTokenIndex {
    pub fn new(equation_index: usize, token_index: usize) -> Self {
        Self {
            equation_index,
            token_index,
        }
    }
}

/// Whether every equation in the list is valid.
pub fn all_valid(equations: &[TokenEquation]) -> bool {
    equations.iter().all(TokenEquation::is_valid)
}

/// Stable textual snapshot of an equation list, used to detect changes.
pub fn snapshot(equations: &[TokenEquation]) -> String {
    serde_json::to_string(equations).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueType;

    #[test]
    fn test_starting_with_custom_is_valid() {
        let eq = TokenEquation::starting_with(Token::custom("needle", ValueType::Custom));
        assert_eq!(eq.status, EquationStatus::Valid);
    }

    #[test]
    fn test_starting_with_category_waits() {
        let eq = TokenEquation::starting_with(Token::category("Status", ValueType::String));
        assert_eq!(eq.status, EquationStatus::Waiting);
    }

    #[test]
    fn test_operator_lookup() {
        let eq = TokenEquation::new(
            vec![
                Token::category("Status", ValueType::String),
                Token::operator("not in", ValueType::String),
            ],
            EquationStatus::Waiting,
        );
        assert_eq!(eq.operator(), Some(Operator::NotIn));
        assert!(eq.triple().is_none());
    }

    #[test]
    fn test_snapshot_ignores_cached_suggestions() {
        let plain = vec![TokenEquation::starting_with(Token::custom("a", ValueType::Custom))];
        let mut cached = plain.clone();
        cached[0].items[0].suggestions = Some(crate::Suggestions::new());
        assert_eq!(snapshot(&plain), snapshot(&cached));
    }
}
