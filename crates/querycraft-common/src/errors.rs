use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum QueryCraftError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("shell error: {0}")]
    Shell(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("retry.max_attempts = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: retry.max_attempts = 0"
        );
    }

    #[test]
    fn querycraft_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: QueryCraftError = config_err.into();
        assert!(matches!(err, QueryCraftError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn querycraft_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: QueryCraftError = io_err.into();
        assert!(matches!(err, QueryCraftError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn querycraft_error_other_variants() {
        let err = QueryCraftError::Ai("GOOGLE_API_KEY not set".into());
        assert_eq!(err.to_string(), "ai error: GOOGLE_API_KEY not set");

        let err = QueryCraftError::Database("unable to open database file".into());
        assert_eq!(err.to_string(), "database error: unable to open database file");

        let err = QueryCraftError::Shell("terminal closed".into());
        assert_eq!(err.to_string(), "shell error: terminal closed");
    }
}
