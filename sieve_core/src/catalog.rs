//! Static description of filterable categories and the suggestions it yields

use serde::{Deserialize, Serialize};

use crate::validator::RELATIVE_TIME_UNITS;
use crate::{Nature, Operator, Suggestions, Token, TokenEquation, ValueType};

/// One filterable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpec {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Known values, offered after an exact-match operator.
    #[serde(default)]
    pub values: Vec<String>,
    /// Set for near-unique fields where listing values makes no sense.
    #[serde(default)]
    pub hide_suggestion: bool,
}

impl CategorySpec {
    pub fn new(name: &str, value_type: ValueType) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            values: Vec::new(),
            hide_suggestion: false,
        }
    }

    pub fn with_values(mut self, values: &[&str]) -> Self {
        self.values = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_hidden_suggestions(mut self) -> Self {
        self.hide_suggestion = true;
        self
    }
}

/// Set of categories a search bar can filter on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<CategorySpec>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategorySpec) -> Self {
        self.categories.push(category);
        self
    }

    pub fn category(&self, name: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Candidates for the token following `previous_token`.
    ///
    /// `previous_equation` is the equation being composed; its first token
    /// names the category whose values are offered after an operator.
    pub fn suggest(
        &self,
        previous_token: Option<&Token>,
        previous_equation: Option<&TokenEquation>,
        current_input: Option<&str>,
    ) -> Suggestions {
        let suggestions = match previous_token.map(|token| token.nature) {
            None | Some(Nature::Value) | Some(Nature::Custom) => self.category_suggestions(),
            Some(Nature::Category) => previous_token
                .and_then(|token| token.label.as_single())
                .and_then(|name| self.category(name))
                .map(operator_suggestions)
                .unwrap_or_default(),
            Some(Nature::Operator) => {
                let operator = previous_token
                    .and_then(|token| token.label.as_single())
                    .and_then(Operator::from_label);
                previous_equation
                    .and_then(|equation| equation.items.first())
                    .and_then(|token| token.label.as_single())
                    .and_then(|name| self.category(name))
                    .map(|category| value_suggestions(category, operator))
                    .unwrap_or_default()
            }
        };

        match current_input {
            Some(input) if !input.is_empty() => suggestions.filtered(input),
            _ => suggestions,
        }
    }

    fn category_suggestions(&self) -> Suggestions {
        let mut suggestions = Suggestions::new();
        for category in &self.categories {
            suggestions.push(
                category.name.as_str(),
                Nature::Category,
                category.value_type,
                category.hide_suggestion,
            );
        }
        suggestions
    }
}

fn operator_suggestions(category: &CategorySpec) -> Suggestions {
    let mut suggestions = Suggestions::new();
    for op in Operator::for_type(category.value_type) {
        suggestions.push(op.label(), Nature::Operator, category.value_type, false);
    }
    suggestions
}

fn value_suggestions(category: &CategorySpec, operator: Option<Operator>) -> Suggestions {
    let mut suggestions = Suggestions::new();
    let value_type = category.value_type;

    let items: Vec<&str> = match operator {
        _ if category.hide_suggestion => Vec::new(),
        Some(Operator::Like | Operator::GreaterThan | Operator::LessThan) => Vec::new(),
        Some(Operator::Last) => RELATIVE_TIME_UNITS.iter().map(|(unit, _)| *unit).collect(),
        _ if value_type == ValueType::Boolean => vec!["true", "false"],
        _ => category.values.iter().map(String::as_str).collect(),
    };

    for item in items {
        suggestions.push(item, Nature::Value, value_type, false);
    }
    suggestions
}
