use std::future::Future;
use std::time::Duration;

use crate::error::{Error, ErrorRetryStrategy};

/// Retry policy for provider requests: exponential backoff with a fixed
/// attempt budget.
///
/// Non-retryable errors (see [`Error::to_retry_strategy`]) propagate
/// immediately without consuming budget. The backoff delay is awaited in
/// full between attempts, with no jitter, and is not cancellable mid-wait.
pub struct RetryContext {
    /// Max attempts before failure
    max_attempts: u32,
    /// Initial backoff between attempts
    initial_backoff_secs: u64,
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 4;
    const DEFAULT_INITIAL_BACKOFF_SECS: u64 = 1;

    /// The default policy: 4 attempts (3 retries), delays of 1s, 2s, 4s.
    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff_secs: Self::DEFAULT_INITIAL_BACKOFF_SECS,
        }
    }

    /// A custom policy. Tests use a zero backoff to avoid real sleeps.
    pub fn with_policy(max_attempts: u32, initial_backoff_secs: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff_secs,
        }
    }

    /// Execute an operation with automatic retry logic
    ///
    /// The operation is re-invoked for every attempt; retryable errors back
    /// off exponentially between attempts, permanent errors return at once.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "timings fetch for İstanbul")
    /// - `operation`: Async function that performs one attempt
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        mut operation: F,
    ) -> Result<R, Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            let result = operation().await;

            match result {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::error!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff_secs =
                            self.initial_backoff_secs * 2_u64.pow(attempt_count - 1);
                        let backoff = Duration::from_secs(backoff_secs);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}
