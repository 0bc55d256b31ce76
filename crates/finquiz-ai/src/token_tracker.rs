//! Token usage tracking across providers.

use std::collections::HashMap;

use crate::TokenUsage;

/// Tracks cumulative token usage per provider.
#[derive(Debug, Default)]
pub struct TokenTracker {
    /// Total usage across all providers.
    total: TokenUsage,
    /// Usage broken down by provider name.
    by_provider: HashMap<String, TokenUsage>,
    /// Number of successful API calls.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from an API call.
    pub fn record(&mut self, provider: &str, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.call_count += 1;

        let entry = self.by_provider.entry(provider.to_string()).or_default();
        entry.input_tokens = entry.input_tokens.saturating_add(usage.input_tokens);
        entry.output_tokens = entry.output_tokens.saturating_add(usage.output_tokens);
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_provider(&self, provider: &str) -> Option<&TokenUsage> {
        self.by_provider.get(provider)
    }

    /// Total tokens (input + output).
    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_totals_and_per_provider() {
        let mut tracker = TokenTracker::new();
        tracker.record(
            "gemini",
            &TokenUsage {
                input_tokens: 10,
                output_tokens: 4,
            },
        );
        tracker.record(
            "gemini",
            &TokenUsage {
                input_tokens: 6,
                output_tokens: 2,
            },
        );

        assert_eq!(tracker.call_count(), 2);
        assert_eq!(tracker.total_tokens(), 22);
        let gemini = tracker.for_provider("gemini").unwrap();
        assert_eq!(gemini.input_tokens, 16);
        assert_eq!(gemini.output_tokens, 6);
        assert!(tracker.for_provider("other").is_none());
    }
}
