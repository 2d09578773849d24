//! Autocomplete candidates offered for the next token

use serde::{Deserialize, Serialize};

use crate::{Label, Nature, Token, ValueType};

/// Candidate list as parallel arrays: entry `i` is described by
/// `items[i]`, `nature[i]`, `types[i]` and `hide_suggestion[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions {
    pub items: Vec<String>,
    pub nature: Vec<Nature>,
    #[serde(rename = "type")]
    pub types: Vec<ValueType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_suggestion: Option<Vec<bool>>,
}

/// A single candidate, read out of a [`Suggestions`] list.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion<'a> {
    pub item: &'a str,
    pub nature: Nature,
    pub value_type: ValueType,
    pub hide_suggestion: bool,
}

impl Suggestion<'_> {
    /// Build the token this candidate stands for.
    pub fn to_token(&self) -> Token {
        Token::new(Label::from(self.item), self.nature, self.value_type)
            .with_hide_suggestion(self.hide_suggestion)
    }
}

impl Suggestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one candidate.
    pub fn with_item(mut self, item: impl Into<String>, nature: Nature, value_type: ValueType) -> Self {
        self.push(item, nature, value_type, false);
        self
    }

    pub fn push(
        &mut self,
        item: impl Into<String>,
        nature: Nature,
        value_type: ValueType,
        hide_suggestion: bool,
    ) {
        // Keep the optional column aligned once any entry sets it.
        if hide_suggestion && self.hide_suggestion.is_none() {
            self.hide_suggestion = Some(vec![false; self.items.len()]);
        }
        if let Some(hidden) = &mut self.hide_suggestion {
            hidden.push(hide_suggestion);
        }
        self.items.push(item.into());
        self.nature.push(nature);
        self.types.push(value_type);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Candidate at `index`, if all parallel columns have an entry for it.
    pub fn get(&self, index: usize) -> Option<Suggestion<'_>> {
        Some(Suggestion {
            item: self.items.get(index)?,
            nature: *self.nature.get(index)?,
            value_type: *self.types.get(index)?,
            hide_suggestion: self
                .hide_suggestion
                .as_ref()
                .and_then(|hidden| hidden.get(index).copied())
                .unwrap_or(false),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Suggestion<'_>> {
        (0..self.items.len()).filter_map(|index| self.get(index))
    }

    /// First candidate whose item is exactly `item`.
    pub fn find(&self, item: &str) -> Option<Suggestion<'_>> {
        self.iter().find(|s| s.item == item)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// First candidate starting with `prefix`, ignoring case.
    pub fn first_prefix_match(&self, prefix: &str) -> Option<Suggestion<'_>> {
        let prefix = prefix.to_lowercase();
        self.iter()
            .find(|s| s.item.to_lowercase().starts_with(&prefix))
    }

    /// Keep only candidates containing `needle`, ignoring case.
    pub fn filtered(&self, needle: &str) -> Suggestions {
        let needle = needle.to_lowercase();
        let mut kept = Suggestions::new();
        for s in self.iter() {
            if s.item.to_lowercase().contains(&needle) {
                kept.push(s.item, s.nature, s.value_type, s.hide_suggestion);
            }
        }
        kept
    }
}
