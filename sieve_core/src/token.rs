//! Tokens: the atomic pieces of a search equation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Suggestions;

/// Syntactic role of a token inside an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    /// A filterable field name.
    Category,
    /// A comparison operator, stored by its display label.
    Operator,
    /// A value drawn from (or accepted in place of) a suggestion list.
    Value,
    /// Free text that was not matched against any suggestion.
    Custom,
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nature::Category => write!(f, "category"),
            Nature::Operator => write!(f, "operator"),
            Nature::Value => write!(f, "value"),
            Nature::Custom => write!(f, "custom"),
        }
    }
}

/// Semantic type a token is interpreted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Date,
    Custom,
    /// Placeholder for tokens rebuilt from persisted filters before their
    /// real type has been looked up.
    Unknown,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::Number => write!(f, "number"),
            ValueType::Boolean => write!(f, "boolean"),
            ValueType::Date => write!(f, "date"),
            ValueType::Custom => write!(f, "custom"),
            ValueType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Token text: one string, or several for set operands ("in" / "not in").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Single(String),
    Multi(Vec<String>),
}

/// Split free text on `,` and `|`, trimming each part.
pub fn split_parts(text: &str) -> Vec<&str> {
    text.split([',', '|']).map(str::trim).collect()
}

impl Label {
    /// The individual values of this label.
    ///
    /// A single label is split on `,` and `|`, so "1, 2" yields two parts.
    pub fn parts(&self) -> Vec<&str> {
        match self {
            Label::Single(text) => split_parts(text),
            Label::Multi(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// Text shown in the input field when the token is edited.
    pub fn as_text(&self) -> String {
        match self {
            Label::Single(text) => text.clone(),
            Label::Multi(items) => items.join(" | "),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Label::Single(text) => Some(text),
            Label::Multi(_) => None,
        }
    }

    /// Whether this label is exactly the given single string.
    pub fn is(&self, text: &str) -> bool {
        self.as_single() == Some(text)
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Single(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Single(text)
    }
}

impl From<Vec<String>> for Label {
    fn from(items: Vec<String>) -> Self {
        Label::Multi(items)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

/// One atomic element of an equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub label: Label,
    pub nature: Nature,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Suggestions cached for this token, filled lazily when it is clicked.
    #[serde(skip)]
    pub suggestions: Option<Suggestions>,
    #[serde(default)]
    pub hide_suggestion: bool,
}

impl Token {
    pub fn new(label: impl Into<Label>, nature: Nature, value_type: ValueType) -> Self {
        Self {
            label: label.into(),
            nature,
            value_type,
            suggestions: None,
            hide_suggestion: false,
        }
    }

    pub fn category(label: impl Into<Label>, value_type: ValueType) -> Self {
        Self::new(label, Nature::Category, value_type)
    }

    pub fn operator(label: impl Into<Label>, value_type: ValueType) -> Self {
        Self::new(label, Nature::Operator, value_type)
    }

    pub fn value(label: impl Into<Label>, value_type: ValueType) -> Self {
        Self::new(label, Nature::Value, value_type)
    }

    pub fn custom(label: impl Into<Label>, value_type: ValueType) -> Self {
        Self::new(label, Nature::Custom, value_type)
    }

    pub fn with_hide_suggestion(mut self, hide: bool) -> Self {
        self.hide_suggestion = hide;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Suggestions) -> Self {
        self.suggestions = Some(suggestions);
        self
    }
}
