use crate::config::ClientConfig;
use crate::{Error, Result};
use reqwest::Method;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Thin wrapper over the HTTP client.
///
/// Attaches the bearer credential and JSON content type to every request and
/// honors the configured timeout. Transport-level failures are mapped to
/// [`Error::Timeout`] / [`Error::Network`] here; status-code classification
/// belongs to the request client.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("fursight-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout,
        })
    }

    /// Issue a single HTTP request.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        query: Option<&[(&str, String)]>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(headers) = headers {
            for (name, value) in headers {
                request = request.header(name, value);
            }
        }

        debug!(%method, path, "issuing request");
        request
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))
    }

    fn map_transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::timeout(format!("no response within {}s", self.timeout.as_secs()))
        } else {
            Error::network(err.to_string())
        }
    }
}
