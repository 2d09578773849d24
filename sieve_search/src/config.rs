//! Search bar configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use sieve_core::validator::DEFAULT_MAX_RELATIVE_YEARS;

/// Behaviour switches for an [`crate::InteractionController`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Allow free-text keyword tokens.
    pub allow_key_word_search: bool,
    /// Delay before a fully valid search is applied.
    pub auto_apply_delay_ms: u64,
    /// Ceiling for relative durations after "last", in years.
    pub max_relative_years: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_key_word_search: true,
            auto_apply_delay_ms: 800,
            max_relative_years: DEFAULT_MAX_RELATIVE_YEARS,
        }
    }
}

impl SearchConfig {
    pub fn with_key_word_search(mut self, allowed: bool) -> Self {
        self.allow_key_word_search = allowed;
        self
    }

    pub fn with_auto_apply_delay(mut self, delay: Duration) -> Self {
        self.auto_apply_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_max_relative_years(mut self, years: u32) -> Self {
        self.max_relative_years = years;
        self
    }

    pub fn auto_apply_delay(&self) -> Duration {
        Duration::from_millis(self.auto_apply_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert!(config.allow_key_word_search);
        assert_eq!(config.auto_apply_delay(), Duration::from_millis(800));
        assert_eq!(config.max_relative_years, 2025);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"allowKeyWordSearch":false}"#).unwrap();
        assert!(!config.allow_key_word_search);
        assert_eq!(config.auto_apply_delay_ms, 800);
    }

    #[test]
    fn test_oversized_delay_saturates() {
        let config = SearchConfig::default().with_auto_apply_delay(Duration::MAX);
        assert_eq!(config.auto_apply_delay_ms, u64::MAX);

        let config = SearchConfig::default().with_auto_apply_delay(Duration::from_millis(25));
        assert_eq!(config.auto_apply_delay_ms, 25);
    }
}
