//! Completion clients and SQL generation for QueryCraft.
//!
//! Provides:
//! - Gemini and Claude clients behind the [`AiClient`] trait
//! - Typed rate-limit classification ([`AiError::RateLimited`])
//! - Fixed-delay retry ([`RetryPolicy`])
//! - Prompt composition and SQL extraction ([`QueryGenerator`])
//! - The per-session transcript ([`Session`]) and token usage tracking

pub mod claude;
pub mod gemini;
mod http;
pub mod generator;
pub mod retry;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use claude::{ClaudeClient, ClaudeConfig};
pub use gemini::{GeminiClient, GeminiConfig};
pub use generator::{clean_sql, GenerationError, QueryGenerator};
pub use retry::RetryPolicy;
pub use session::Session;
pub use token_tracker::TokenTracker;

/// A hosted text-completion endpoint.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Short provider name, used for usage tracking and logs.
    fn provider(&self) -> &str;

    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Not configured: {0}")]
    NotConfigured(String),
}

impl AiError {
    /// Whether the retry policy should try again after this error.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, AiError::RateLimited)
    }
}
