//! Retry policy for a single logical request.

use crate::config::ClientConfig;
use crate::Error;
use std::time::Duration;

/// How to proceed after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    /// Sleep for `delay`, then retry the same request.
    Retry { delay: Duration },
    /// Surface the error as-is; the kind is not retriable.
    Fail,
    /// The error is retriable but the attempt budget is spent.
    Exhausted,
}

/// Deterministic retry rules: rate limits wait the server-specified
/// duration verbatim, transient transport failures back off exponentially,
/// everything else fails immediately.
#[derive(Debug, Clone)]
pub(crate) struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_base: Duration,
    pub backoff_cap: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff_base: config.backoff_base,
            backoff_cap: config.backoff_cap,
        }
    }

    /// Decide what to do after attempt `attempt` (0-based) failed with `err`.
    pub fn decide(&self, err: &Error, attempt: u32) -> Decision {
        if !err.is_retryable() {
            return Decision::Fail;
        }
        if attempt + 1 >= self.max_retries {
            return Decision::Exhausted;
        }
        let delay = match err.retry_after() {
            Some(wait) => wait,
            None => self.backoff_delay(attempt),
        };
        Decision::Retry { delay }
    }

    /// Exponential backoff: base * 2^attempt, capped.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.backoff_base.saturating_mul(factor).min(self.backoff_cap)
    }
}
