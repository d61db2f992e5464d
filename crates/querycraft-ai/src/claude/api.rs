//! AiClient trait implementation for ClaudeClient.

use async_trait::async_trait;
use tracing::debug;

use crate::http::{check_status, network_error};
use crate::{AiClient, AiError, AiResponse, Message};

use super::client::{ClaudeClient, ANTHROPIC_API_URL, ANTHROPIC_VERSION};

#[async_trait]
impl AiClient for ClaudeClient {
    fn provider(&self) -> &str {
        "claude"
    }

    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages);

        debug!(model = %self.config.model, "Claude API request");

        let response = self
            .http
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(network_error)?;

        let response = check_status(response).await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}
