use std::future::Future;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::error::KeywordError;

/// Fixed-delay retry. This is the only retry loop in the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Always at least 1.
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            delay: Duration::from_millis(config.delay_ms),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Run `op` until it succeeds, the error is not retryable, or the
    /// attempt budget is spent. Returns the last error.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, KeywordError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, KeywordError>>,
    {
        let mut attempt = 1;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) if attempt >= self.max_attempts => {
                    tracing::warn!("Attempt {attempt}/{} failed: {e}. Giving up", self.max_attempts);
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!(
                        "Attempt {attempt}/{} failed: {e}. Retrying in {:?}",
                        self.max_attempts,
                        self.delay
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
