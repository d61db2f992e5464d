//! Claude API client struct, request building, and response parsing.

use crate::http::build_http_client;
use crate::{AiError, AiResponse, Message, Role, TokenUsage};

use super::config::ClaudeConfig;

pub(crate) const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude API client.
pub struct ClaudeClient {
    pub(crate) config: ClaudeConfig,
    pub(crate) http: reqwest::Client,
}

impl ClaudeClient {
    pub fn new(config: ClaudeConfig) -> Result<Self, AiError> {
        Ok(Self {
            config,
            http: build_http_client()?,
        })
    }

    /// Build the JSON request body for the Messages API.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let msgs: Vec<_> = messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                serde_json::json!({
                    "role": role,
                    "content": msg.content,
                })
            })
            .collect();

        serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": msgs,
        })
    }

    /// Parse a Messages API response, concatenating its text blocks.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let blocks = json["content"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("no content in response".to_string()))?;

        let content: String = blocks
            .iter()
            .filter(|b| b["type"] == "text")
            .filter_map(|b| b["text"].as_str())
            .collect();

        let usage = TokenUsage {
            input_tokens: json["usage"]["input_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["output_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}
