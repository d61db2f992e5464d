//! Bounded retry with a fixed delay.
//!
//! Only [`AiError::RateLimited`] is retried; every other error returns
//! immediately. The delay is constant between attempts.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::AiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first. Treated as at least 1.
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(5),
        }
    }
}

/// Why a retried operation gave up.
#[derive(Debug, thiserror::Error)]
pub enum RetryError {
    #[error("still rate limited after {attempts} attempts")]
    Exhausted { attempts: u32 },
    #[error(transparent)]
    Fatal(AiError),
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Run `op` until it succeeds, fails with a non-rate-limit error, or the
    /// attempt budget runs out. No sleep follows the final attempt.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, RetryError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, AiError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        for attempt in 1..=max_attempts {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_rate_limit() => {
                    if attempt < max_attempts {
                        warn!(
                            attempt,
                            max_attempts,
                            delay_secs = self.delay.as_secs_f64(),
                            "rate limit hit, retrying"
                        );
                        tokio::time::sleep(self.delay).await;
                    }
                }
                Err(e) => return Err(RetryError::Fatal(e)),
            }
        }
        warn!(max_attempts, "rate limit retries exhausted");
        Err(RetryError::Exhausted {
            attempts: max_attempts,
        })
    }
}
