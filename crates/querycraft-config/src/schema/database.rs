//! Database selection.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which SQLite file a session opens when none is given on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub default_path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from("chinook.db"),
        }
    }
}
