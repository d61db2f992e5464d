//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive covering every querycraft crate.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "querycraft=debug",
            LogLevel::Info => "querycraft=info",
            LogLevel::Warning => "querycraft=warn",
            LogLevel::Error => "querycraft=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
