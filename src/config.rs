//! Client configuration.

use crate::{Error, Result};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.fursight.ai";

/// Configuration for a [`crate::FurSightClient`].
///
/// Immutable once the client is built; every knob of the reliability layer
/// (timeout, retry budget, pacing interval, backoff shape) lives here.
#[derive(Clone)]
pub struct ClientConfig {
    /// Opaque bearer credential. Redacted from `Debug` output.
    pub api_key: String,
    /// Base endpoint URL, without a trailing slash.
    pub base_url: String,
    /// Per-request transport timeout.
    pub timeout: Duration,
    /// Maximum attempts per logical request, including the first.
    pub max_retries: u32,
    /// Minimum gap between successive requests from one client instance.
    pub min_request_interval: Duration,
    /// First backoff delay for transient failures; doubles per attempt.
    pub backoff_base: Duration,
    /// Upper bound on any single backoff delay.
    pub backoff_cap: Duration,
    /// Wait applied when a 429 carries no usable `retry-after` header.
    pub retry_after_default: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            min_request_interval: Duration::from_millis(100),
            backoff_base: Duration::from_secs(1),
            backoff_cap: Duration::from_secs(60),
            retry_after_default: Duration::from_secs(60),
        }
    }

    /// Override the base endpoint URL. Trailing slashes are trimmed so path
    /// concatenation stays predictable.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the attempt budget. Clamped to at least 1.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    pub fn with_min_request_interval(mut self, interval: Duration) -> Self {
        self.min_request_interval = interval;
        self
    }

    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    pub fn with_backoff_cap(mut self, cap: Duration) -> Self {
        self.backoff_cap = cap;
        self
    }

    pub fn with_retry_after_default(mut self, default: Duration) -> Self {
        self.retry_after_default = default;
        self
    }

    /// Fail fast on configuration a request could never succeed with.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::validation("API key must not be empty"));
        }
        Url::parse(&self.base_url).map_err(|e| {
            Error::validation(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("min_request_interval", &self.min_request_interval)
            .field("backoff_base", &self.backoff_base)
            .field("backoff_cap", &self.backoff_cap)
            .field("retry_after_default", &self.retry_after_default)
            .finish()
    }
}
