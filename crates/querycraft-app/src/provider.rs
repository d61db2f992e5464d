//! Builds the completion client and retry policy from config.

use std::time::Duration;

use querycraft_ai::{
    AiClient, AiError, ClaudeClient, ClaudeConfig, GeminiClient, GeminiConfig, RetryPolicy,
};
use querycraft_config::schema::{ModelConfig, ProviderKind, RetryConfig};
use tracing::info;

/// Create the configured provider's client. API keys come from the environment.
pub fn build_client(model: &ModelConfig) -> Result<Box<dyn AiClient>, AiError> {
    let client: Box<dyn AiClient> = match model.provider {
        ProviderKind::Gemini => {
            let mut config = GeminiConfig::from_env()?
                .with_max_tokens(model.max_tokens)
                .with_temperature(model.temperature);
            if let Some(name) = &model.model {
                config = config.with_model(name.clone());
            }
            info!(model = %config.model, "using Gemini");
            Box::new(GeminiClient::new(config)?)
        }
        ProviderKind::Claude => {
            let mut config = ClaudeConfig::from_env()?
                .with_max_tokens(model.max_tokens)
                .with_temperature(model.temperature);
            if let Some(name) = &model.model {
                config = config.with_model(name.clone());
            }
            info!(model = %config.model, "using Claude");
            Box::new(ClaudeClient::new(config)?)
        }
    };
    Ok(client)
}

pub fn retry_policy(retry: &RetryConfig) -> RetryPolicy {
    RetryPolicy::new(retry.max_attempts, Duration::from_secs(u64::from(retry.delay_secs)))
}
