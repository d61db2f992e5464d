//! Configuration schema types for QueryCraft.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod database;
mod display;
mod model;
mod retry;
mod system;

pub use database::*;
pub use display::*;
pub use model::*;
pub use retry::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for QueryCraft.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QueryCraftConfig {
    pub database: DatabaseConfig,
    pub model: ModelConfig,
    pub retry: RetryConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}
