//! Result display settings.

use serde::{Deserialize, Serialize};

/// How result tables are printed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows printed per result before truncating (valid range: 1-10000).
    pub max_rows: u32,
    pub format: OutputFormat,
    /// Echo the generated SQL before its results.
    pub show_sql: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_rows: 200,
            format: OutputFormat::Table,
            show_sql: true,
        }
    }
}
