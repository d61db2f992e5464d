//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{OutputFormat, ProviderKind, QueryCraftConfig};
use querycraft_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_querycraft_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[model]
provider = "claude"
model = "claude-sonnet-4-20250514"

[display]
format = "json"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.provider, ProviderKind::Claude);
    assert_eq!(config.model.model.as_deref(), Some("claude-sonnet-4-20250514"));
    assert_eq!(config.display.format, OutputFormat::Json);
    // Defaults preserved
    assert_eq!(config.retry.max_attempts, 3);
    assert_eq!(config.display.max_rows, 200);
    assert!(config.display.show_sql);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn loader_keeps_out_of_range_values_for_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[retry]
max_attempts = 50
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.retry.max_attempts, 50);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("querycraft").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.provider, ProviderKind::Gemini);
    assert_eq!(config.database.default_path, Path::new("chinook.db"));
}

#[test]
fn default_config_toml_is_valid() {
    let config: QueryCraftConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.retry.delay_secs, 5);
}

#[test]
fn default_config_path_is_reasonable() {
    // May not resolve in every CI environment.
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("querycraft"));
        assert!(path_str.ends_with("config.toml"));
    }
}
