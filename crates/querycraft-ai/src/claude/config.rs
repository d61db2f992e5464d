//! Claude API client configuration.

use std::fmt;

use crate::AiError;

pub const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";

/// Claude API client configuration.
#[derive(Clone)]
pub struct ClaudeConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl fmt::Debug for ClaudeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaudeConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl ClaudeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_CLAUDE_MODEL.to_string(),
            max_tokens: 1024,
            temperature: 0.0,
        }
    }

    /// Create config from `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Result<Self, AiError> {
        match std::env::var("ANTHROPIC_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(AiError::NotConfigured(
                "Claude API not configured. Set ANTHROPIC_API_KEY (or add it to .env).".into(),
            )),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}
