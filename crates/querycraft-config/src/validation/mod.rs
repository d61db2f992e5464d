//! Full configuration validation.
//!
//! Checks numeric ranges and required strings, collecting every problem
//! into a single `ConfigError`.

mod helpers;


use crate::schema::QueryCraftConfig;
use helpers::{validate_range, validate_range_f64};
use querycraft_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &QueryCraftConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.database.default_path.as_os_str().is_empty() {
        errors.push("database.default_path must not be empty".into());
    }

    if let Some(model) = &config.model.model {
        if model.trim().is_empty() {
            errors.push("model.model must not be blank".into());
        }
    }
    validate_range(&mut errors, "model.max_tokens", config.model.max_tokens, 1, 65536);
    validate_range_f64(&mut errors, "model.temperature", config.model.temperature, 0.0, 2.0);

    validate_range(&mut errors, "retry.max_attempts", config.retry.max_attempts, 1, 10);
    validate_range(&mut errors, "retry.delay_secs", config.retry.delay_secs, 0, 120);

    validate_range(&mut errors, "display.max_rows", config.display.max_rows, 1, 10000);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
