//! QueryCraft configuration system.
//!
//! TOML-based configuration with validation. Every section uses
//! `serde(default)` so partial configs work out of the box. API keys are
//! never read from the file; they come from the environment.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use querycraft_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.database.default_path.display());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::QueryCraftConfig;

use querycraft_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Creates a commented default file if none exists, then validates the result.
pub fn load_config() -> Result<QueryCraftConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<QueryCraftConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a TOML string, as shown by `querycraft config`.
pub fn config_to_toml(config: &QueryCraftConfig) -> String {
    toml::to_string_pretty(config)
        .unwrap_or_else(|e| format!("# failed to serialize config: {e}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_toml_contains_all_sections() {
        let config = QueryCraftConfig::default();
        let text = config_to_toml(&config);
        assert!(text.contains("[database]"));
        assert!(text.contains("[model]"));
        assert!(text.contains("[retry]"));
        assert!(text.contains("[display]"));
        assert!(text.contains("[logging]"));
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = QueryCraftConfig::default();
        let text = config_to_toml(&config);
        let parsed: QueryCraftConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.retry.max_attempts, 3);
        assert_eq!(parsed.retry.delay_secs, 5);
        assert_eq!(parsed.database.default_path, config.database.default_path);
    }

    #[test]
    fn load_config_from_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[retry]\nmax_attempts = 0\n").unwrap();
        match load_config_from(&path) {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("max_attempts")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
