use std::time::Duration;
use thiserror::Error;

/// Unified error type for the FurSight SDK.
///
/// Every failure surfaced to a caller is exactly one of these kinds; raw
/// transport errors never leak across the crate boundary. Callers are
/// expected to branch on the kind: prompt for a new credential on
/// [`Error::Authentication`], show field-level messages on
/// [`Error::Validation`], back off on [`Error::RateLimited`].
#[derive(Debug, Error)]
pub enum Error {
    /// Caller-supplied data violates a known constraint: an HTTP 400 from
    /// the service, or a form-side dropdown check that failed before any
    /// network call. Not retriable.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// The credential was rejected by the service (HTTP 401). Not retriable
    /// without caller intervention.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// The credential is valid but the account lacks quota (HTTP 402).
    #[error("insufficient credits: {message}")]
    InsufficientCredits { message: String },

    /// Too many requests (HTTP 429). Retriable after the server-specified
    /// wait; `retry_after_secs` falls back to 60 when the header is absent
    /// or unparseable.
    #[error("rate limited: {message} (retry after {retry_after_secs}s)")]
    RateLimited {
        message: String,
        retry_after_secs: u64,
    },

    /// The transport produced no response within the configured timeout.
    /// Retriable with exponential backoff.
    #[error("request timeout: {message}")]
    Timeout { message: String },

    /// Transport-level connection error (DNS, refused, reset). Retriable
    /// with exponential backoff.
    #[error("network error: {message}")]
    Network { message: String },

    /// Any other non-2xx response, with the original status and raw body
    /// preserved. Not retried.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The retry budget ran out without a successful response. Carries the
    /// failure from the final attempt.
    #[error("max retries exceeded after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a new validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Create a new authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication {
            message: message.into(),
        }
    }

    /// Create a new insufficient-credits error.
    pub fn insufficient_credits(message: impl Into<String>) -> Self {
        Error::InsufficientCredits {
            message: message.into(),
        }
    }

    /// Create a new timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Error::Timeout {
            message: message.into(),
        }
    }

    /// Create a new network error.
    pub fn network(message: impl Into<String>) -> Self {
        Error::Network {
            message: message.into(),
        }
    }

    /// Whether the request client may retry after this failure.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::RateLimited { .. } | Error::Timeout { .. } | Error::Network { .. }
        )
    }

    /// Server-specified wait, for rate-limit failures only. Transient
    /// transport failures use exponential backoff instead.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimited {
                retry_after_secs, ..
            } => Some(Duration::from_secs(*retry_after_secs)),
            _ => None,
        }
    }
}
