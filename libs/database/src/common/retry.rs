//! Startup retry with exponential backoff.
//!
//! Connection establishment is the only place this crate retries;
//! request-path operations fail straight through to the caller.

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff settings for connection retries.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Attempts after the first failure
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,
    /// Ceiling for the backoff delay, in milliseconds
    pub max_delay_ms: u64,
    /// Growth factor applied to the delay after each retry
    pub backoff_multiplier: f64,
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    fn next_delay(&self, current_ms: u64) -> u64 {
        ((current_ms as f64 * self.backoff_multiplier) as u64).min(self.max_delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
        }
    }
}

/// Run `operation` until it succeeds or the retry budget is spent.
///
/// The last error is returned unchanged once `max_retries` retries have
/// failed, so callers see the real connection failure.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut delay_ms = config.initial_delay_ms;

    for retries_used in 0..config.max_retries {
        match operation().await {
            Ok(value) => {
                if retries_used > 0 {
                    debug!("Connection established after {} retries", retries_used);
                }
                return Ok(value);
            }
            Err(e) => {
                debug!(
                    "Connection attempt {} failed: {}. Next try in {}ms",
                    retries_used + 1,
                    e,
                    delay_ms
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                delay_ms = config.next_delay(delay_ms);
            }
        }
    }

    // Final attempt; its error is the caller's error.
    operation().await.inspect_err(|e| {
        warn!(
            "Giving up after {} attempts: {}",
            config.max_retries + 1,
            e
        );
    })
}

/// [`retry_with_backoff`] with the default budget (3 retries from 100ms).
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Fails `failures` times, then succeeds; counts calls.
    struct Flaky {
        calls: Cell<u32>,
        failures: u32,
    }

    impl Flaky {
        fn new(failures: u32) -> Self {
            Self {
                calls: Cell::new(0),
                failures,
            }
        }

        async fn call(&self) -> Result<u32, String> {
            let n = self.calls.get() + 1;
            self.calls.set(n);
            if n <= self.failures {
                Err(format!("failure {}", n))
            } else {
                Ok(n)
            }
        }
    }

    fn fast() -> RetryConfig {
        RetryConfig::new().with_initial_delay(1).with_max_delay(2)
    }

    #[tokio::test]
    async fn test_immediate_success_makes_one_call() {
        let op = Flaky::new(0);
        let result = retry_with_backoff(|| op.call(), fast()).await;

        assert_eq!(result.unwrap(), 1);
        assert_eq!(op.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_recovers_within_budget() {
        let op = Flaky::new(2);
        let result = retry_with_backoff(|| op.call(), fast()).await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(op.calls.get(), 3);
    }

    #[tokio::test]
    async fn test_budget_exhaustion_returns_last_error() {
        let op = Flaky::new(u32::MAX);
        let config = fast().with_max_retries(2);
        let result = retry_with_backoff(|| op.call(), config).await;

        // 1 initial + 2 retries; the final error is the one surfaced.
        assert_eq!(result.unwrap_err(), "failure 3");
        assert_eq!(op.calls.get(), 3);
    }

    #[tokio::test]
    async fn test_default_budget_is_four_attempts() {
        let op = Flaky::new(u32::MAX);
        let result = retry(|| op.call()).await;

        assert!(result.is_err());
        assert_eq!(op.calls.get(), 4);
    }

    #[test]
    fn test_delay_growth_is_capped() {
        let config = RetryConfig::new().with_initial_delay(100).with_max_delay(300);

        assert_eq!(config.next_delay(100), 200);
        assert_eq!(config.next_delay(200), 300);
        assert_eq!(config.next_delay(300), 300);
    }
}
