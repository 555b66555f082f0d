//! Status-code classification into the error taxonomy.

use crate::Error;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use std::time::Duration;

/// Error-body convention used by the service: a `detail` message plus an
/// optional machine-readable code. A `timestamp` may also be present and is
/// ignored.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "message")]
    detail: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// Extract a human-readable message from an error response body, falling
/// back to the raw text when it is not the expected shape.
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => {
            let detail = parsed
                .detail
                .unwrap_or_else(|| format!("HTTP {}", status));
            match parsed.code {
                Some(code) => format!("{} [{}]", detail, code),
                None => detail,
            }
        }
        Err(_) => format!("HTTP {}: {}", status, body),
    }
}

/// Seconds to wait out of a 429 `retry-after` header. Only the plain
/// `<seconds>` form is supported; missing or unparseable headers fall back
/// to the configured default.
fn retry_after_secs(headers: &HeaderMap, default: Duration) -> u64 {
    headers
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(default.as_secs())
}

/// Map a non-2xx response to exactly one taxonomy kind.
///
/// Generic API failures keep the raw body so nothing the server said is
/// lost; the specific kinds carry the parsed message.
pub(crate) fn classify_response(
    status: u16,
    headers: &HeaderMap,
    body: String,
    retry_after_default: Duration,
) -> Error {
    match status {
        400 => Error::validation(error_message(status, &body)),
        401 => Error::authentication(error_message(status, &body)),
        402 => Error::insufficient_credits(error_message(status, &body)),
        429 => Error::RateLimited {
            message: error_message(status, &body),
            retry_after_secs: retry_after_secs(headers, retry_after_default),
        },
        _ => Error::Api {
            status,
            message: body,
        },
    }
}
