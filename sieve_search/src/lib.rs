//! Interactive search bar for Sieve token equations.
//!
//! Wraps the equation logic of `sieve_core` in an [`InteractionController`]
//! that reacts to key presses and clicks, loads suggestions from a
//! [`SuggestionProvider`] and applies valid searches after a debounce delay.

mod config;
mod controller;
mod debounce;
pub mod provider;
pub mod rehydrate;

pub use config::SearchConfig;
pub use controller::{FilterSink, InteractionController, Key};
pub use debounce::DebounceTimer;
pub use provider::{CatalogProvider, ProviderError, SuggestionParams, SuggestionProvider};
pub use rehydrate::filters_to_equations;
