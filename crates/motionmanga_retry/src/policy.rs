//! Fixed-interval retry policy.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio_retry2::{Retry, RetryError, strategy::FixedInterval};
use tracing::{debug, warn};

/// Attempt cap and delay for one class of remote call.
///
/// No jitter, no backoff growth, and no distinction between error classes:
/// every failure is retried until attempts run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    max_attempts: usize,
    delay: Duration,
}

impl Default for RetryPolicy {
    /// Three attempts, five seconds apart.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Create a policy. `max_attempts` below one is raised to one.
    pub fn new(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// A policy that makes exactly one attempt.
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Total attempts, including the first.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Delay between attempts.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `operation` until it succeeds or the attempt cap is reached.
    ///
    /// `label` names the call site in log output. The error from the final
    /// attempt is returned as-is.
    pub async fn execute<F, Fut, T, E>(&self, label: &str, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let max_attempts = self.max_attempts;
        let delay = self.delay;
        let strategy = FixedInterval::new(delay).take(max_attempts - 1);
        let mut attempt = 0usize;

        Retry::spawn(strategy, || {
            attempt += 1;
            let current = attempt;
            let call = operation();
            async move {
                match call.await {
                    Ok(value) => {
                        if current > 1 {
                            debug!(label, attempt = current, "Call succeeded after retry");
                        }
                        Ok(value)
                    }
                    Err(e) => {
                        if current < max_attempts {
                            warn!(
                                label,
                                attempt = current,
                                max_attempts,
                                delay_secs = delay.as_secs_f64(),
                                error = %e,
                                "Call failed, retrying"
                            );
                        } else {
                            warn!(label, attempt = current, error = %e, "Call failed, giving up");
                        }
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    }
                }
            }
        })
        .await
    }
}
