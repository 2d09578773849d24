//! Suggestion providers: where autocomplete candidates come from

use std::fmt;
use std::future::Future;

use log::{debug, warn};

use sieve_core::{Catalog, Suggestions, Token, TokenEquation};

/// Context of a suggestion request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionParams {
    /// Token right before the one being suggested, if any.
    pub previous_token: Option<Token>,
    /// Equation the suggested token belongs to.
    pub previous_equation: Option<TokenEquation>,
    /// Current input text, only sent to providers that use it.
    pub current_input: Option<String>,
    pub equation_index: Option<usize>,
}

impl SuggestionParams {
    pub fn after(previous_token: Token, previous_equation: TokenEquation) -> Self {
        Self {
            previous_token: Some(previous_token),
            previous_equation: Some(previous_equation),
            ..Default::default()
        }
    }
}

/// Error reported by a suggestion provider.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The backing service could not be reached
    Unavailable(String),
    /// The service answered with something that is not a suggestion list
    InvalidResponse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Unavailable(msg) => write!(f, "Suggestion provider unavailable: {}", msg),
            ProviderError::InvalidResponse(msg) => {
                write!(f, "Invalid suggestion response: {}", msg)
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Supplies autocomplete candidates for the next token of a search.
pub trait SuggestionProvider: Send + Sync + 'static {
    fn create_suggestions(
        &self,
        params: SuggestionParams,
    ) -> impl Future<Output = Result<Suggestions, ProviderError>> + Send;

    /// Whether results depend on the current input text.
    ///
    /// When set, suggestions are fetched again on every keystroke; otherwise
    /// only when the token context changes.
    fn uses_free_text_context(&self) -> bool {
        false
    }
}

/// Fetch suggestions, treating a failed request as an empty list.
pub async fn fetch_or_empty<P: SuggestionProvider>(
    provider: &P,
    params: SuggestionParams,
) -> Suggestions {
    match provider.create_suggestions(params).await {
        Ok(suggestions) => {
            debug!("Fetched {} suggestions", suggestions.len());
            suggestions
        }
        Err(e) => {
            warn!("{}; continuing without suggestions", e);
            Suggestions::new()
        }
    }
}

/// Provider answering from a static [`Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    catalog: Catalog,
    free_text: bool,
}

impl CatalogProvider {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            free_text: false,
        }
    }

    /// Filter candidates by the current input, refetching on every keystroke.
    pub fn with_free_text_context(mut self, enabled: bool) -> Self {
        self.free_text = enabled;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl SuggestionProvider for CatalogProvider {
    async fn create_suggestions(
        &self,
        params: SuggestionParams,
    ) -> Result<Suggestions, ProviderError> {
        Ok(self.catalog.suggest(
            params.previous_token.as_ref(),
            params.previous_equation.as_ref(),
            params.current_input.as_deref(),
        ))
    }

    fn uses_free_text_context(&self) -> bool {
        self.free_text
    }
}
