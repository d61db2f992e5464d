//! Rate-limit retry settings.

use serde::{Deserialize, Serialize};

/// Fixed-delay retry applied when the provider reports rate limiting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts including the first (valid range: 1-10).
    pub max_attempts: u32,
    /// Seconds to wait between attempts (valid range: 0-120).
    pub delay_secs: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_secs: 5,
        }
    }
}
