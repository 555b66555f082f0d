use crate::client::classify;
use crate::client::policy::{Decision, RetryPolicy};
use crate::config::ClientConfig;
use crate::resilience::Pacer;
use crate::transport::HttpTransport;
use crate::{Error, Result};
use reqwest::Method;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Owns the transport and the reliability layer: pacing, error
/// classification and retries.
///
/// Cheap to clone; clones share the same pacing state, so every request
/// issued through one logical client respects the configured minimum
/// interval.
#[derive(Clone)]
pub struct RequestClient {
    transport: Arc<HttpTransport>,
    pacer: Arc<Pacer>,
    policy: RetryPolicy,
    retry_after_default: Duration,
}

impl RequestClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transport: Arc::new(HttpTransport::new(config)?),
            pacer: Arc::new(Pacer::new(config.min_request_interval)),
            policy: RetryPolicy::from_config(config),
            retry_after_default: config.retry_after_default,
        })
    }

    /// Execute one logical request and return the parsed response body.
    ///
    /// Retries are internal: the caller only observes added latency, unless
    /// the budget runs out, which surfaces as [`Error::RetriesExhausted`].
    /// Every wait is a task suspension, so dropping the returned future
    /// abandons the retry loop at the next await point.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        query: Option<&[(&str, String)]>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<serde_json::Value> {
        let mut attempt: u32 = 0;
        loop {
            self.pacer.acquire().await;
            let start = Instant::now();

            let err = match self
                .transport
                .send(method.clone(), path, body, query, headers)
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.json::<serde_json::Value>().await.map_err(|e| {
                            Error::Api {
                                status: status.as_u16(),
                                message: format!("malformed response body: {}", e),
                            }
                        });
                    }

                    let response_headers = response.headers().clone();
                    let body_text = response.text().await.unwrap_or_default();
                    info!(
                        http_status = status.as_u16(),
                        path,
                        duration_ms = start.elapsed().as_millis() as u64,
                        "request failed"
                    );
                    classify::classify_response(
                        status.as_u16(),
                        &response_headers,
                        body_text,
                        self.retry_after_default,
                    )
                }
                Err(err) => err,
            };

            match self.policy.decide(&err, attempt) {
                Decision::Retry { delay } => {
                    warn!(
                        path,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "retrying after transient failure"
                    );
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
                Decision::Fail => return Err(err),
                Decision::Exhausted => {
                    return Err(Error::RetriesExhausted {
                        attempts: attempt + 1,
                        source: Box::new(err),
                    })
                }
            }
        }
    }
}
