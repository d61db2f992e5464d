//! Token usage for one session, broken down by provider.

use std::collections::BTreeMap;

use crate::TokenUsage;

/// Calls and tokens attributed to one provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderUsage {
    pub calls: u64,
    pub usage: TokenUsage,
}

impl ProviderUsage {
    fn add(&mut self, usage: &TokenUsage) {
        self.calls += 1;
        self.usage.input_tokens = self.usage.input_tokens.saturating_add(usage.input_tokens);
        self.usage.output_tokens = self.usage.output_tokens.saturating_add(usage.output_tokens);
    }
}

#[derive(Debug, Default)]
pub struct TokenTracker {
    total: ProviderUsage,
    by_provider: BTreeMap<String, ProviderUsage>,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the usage of one successful completion.
    pub fn record(&mut self, provider: &str, usage: &TokenUsage) {
        self.total.add(usage);
        self.by_provider
            .entry(provider.to_string())
            .or_default()
            .add(usage);
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total.usage
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.usage.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.total.calls
    }

    /// Per-provider usage, ordered by provider name.
    pub fn providers(&self) -> impl Iterator<Item = (&str, &ProviderUsage)> {
        self.by_provider
            .iter()
            .map(|(name, usage)| (name.as_str(), usage))
    }
}
