//! Retry wrapper with randomized backoff
//!
//! Wraps any fallible async operation, re-invoking it a fixed number of
//! times. Every failure is logged and followed by a sleep of the minimum
//! backoff scaled by a random factor in [1, 2), so repeated runs do not
//! hammer the remote host on a fixed cadence.

use rand::Rng;
use std::future::Future;
use std::time::Duration;

/// Configuration for retry behavior, bound at construction time
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of invocation attempts (including the first)
    pub max_attempts: u32,

    /// Minimum sleep between attempts; the actual sleep is randomized
    /// between 1x and 2x this value
    pub min_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            min_backoff: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given attempt budget and minimum backoff
    #[must_use]
    pub fn new(max_attempts: u32, min_backoff: Duration) -> Self {
        Self {
            max_attempts,
            min_backoff,
        }
    }

    /// Runs an operation under this policy, returning the first success
    ///
    /// Any error counts as a failed attempt: it is logged, a jittered
    /// backoff sleep follows, and the operation is invoked again until the
    /// attempt budget runs out. Exhausting the budget yields `None` rather
    /// than the last error, so callers downstream see "no result" and keep
    /// going.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to invoke; called once per attempt
    ///
    /// # Returns
    ///
    /// * `Some(value)` - The first successful result
    /// * `None` - All attempts failed
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Option<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
        E: std::fmt::Display,
    {
        for _ in 0..self.max_attempts {
            match op().await {
                Ok(value) => return Some(value),
                Err(e) => {
                    tracing::error!("{}", e);
                    tokio::time::sleep(self.jittered_backoff()).await;
                }
            }
        }

        None
    }

    /// Sleep duration for one failed attempt: `min_backoff * (1 + U)`
    /// with `U` uniform in [0, 1)
    fn jittered_backoff(&self) -> Duration {
        self.min_backoff
            .mul_f64(1.0 + rand::thread_rng().gen::<f64>())
    }
}
