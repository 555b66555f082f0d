//! Typed API surface: one method per remote operation.
//!
//! Methods here only translate shapes — serialize typed input, delegate to
//! the request client, deserialize the response. Request-client failures
//! propagate unchanged.

use crate::client::RequestClient;
use crate::config::ClientConfig;
use crate::form::AdoptionForm;
use crate::types::{DropdownValues, FieldMap, HealthStatus, ModelInfo, PredictionResponse};
use crate::{Error, Result};
use reqwest::Method;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SampleDataEnvelope {
    sample_data: FieldMap,
}

#[derive(Debug, Deserialize)]
struct DropdownValuesEnvelope {
    dropdown_values: DropdownValues,
}

/// Client for the FurSight pet-adoption-matching API.
///
/// Cheap to clone; clones share pacing state, so all requests issued
/// through one logical client keep the configured minimum spacing.
#[derive(Clone)]
pub struct FurSightClient {
    inner: RequestClient,
}

impl FurSightClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            inner: RequestClient::new(&config)?,
        })
    }

    /// Start an empty [`AdoptionForm`] backed by this client.
    pub fn form(&self) -> AdoptionForm {
        AdoptionForm::new(self.clone())
    }

    /// Liveness and readiness of the remote service.
    pub async fn health(&self) -> Result<HealthStatus> {
        let value = self
            .inner
            .execute(Method::GET, "/health", None, None, None)
            .await?;
        decode(value)
    }

    /// Complete exemplar field set, usable to pre-populate a form or as a
    /// smoke-test payload.
    pub async fn sample_data(&self) -> Result<FieldMap> {
        let value = self
            .inner
            .execute(Method::GET, "/form/sample-data", None, None, None)
            .await?;
        let envelope: SampleDataEnvelope = decode(value)?;
        Ok(envelope.sample_data)
    }

    /// Per-field allowed-value lists for dropdown-constrained fields.
    pub async fn dropdown_values(&self) -> Result<DropdownValues> {
        let value = self
            .inner
            .execute(Method::GET, "/form/dropdown-values", None, None, None)
            .await?;
        let envelope: DropdownValuesEnvelope = decode(value)?;
        Ok(envelope.dropdown_values)
    }

    /// Submit one adopter/dog pair for prediction.
    ///
    /// The two partitions are merged into a single flat payload; dog-side
    /// values win on key collisions. `include_explanation` asks the service
    /// to compute and return counselor guidance alongside the scores.
    pub async fn predict_single(
        &self,
        adopter_data: &FieldMap,
        dog_data: &FieldMap,
        include_explanation: bool,
    ) -> Result<PredictionResponse> {
        let mut payload = serde_json::Map::with_capacity(adopter_data.len() + dog_data.len());
        for (name, value) in adopter_data.iter().chain(dog_data.iter()) {
            payload.insert(name.clone(), serde_json::Value::from(value));
        }

        let query = [("include_explanation", include_explanation.to_string())];
        let value = self
            .inner
            .execute(
                Method::POST,
                "/predict/single",
                Some(&serde_json::Value::Object(payload)),
                Some(&query),
                None,
            )
            .await?;
        decode(value)
    }

    /// Metadata about the loaded prediction model.
    pub async fn model_info(&self) -> Result<ModelInfo> {
        let value = self
            .inner
            .execute(Method::GET, "/model/info", None, None, None)
            .await?;
        decode(value)
    }

    /// Reference guide for the 3-band recommendation scheme
    /// (favorable / needs-review / unfavorable). The service serves this as
    /// free-form documentation, so it stays untyped.
    pub async fn prediction_bands(&self) -> Result<serde_json::Value> {
        self.inner
            .execute(Method::GET, "/prediction/bands", None, None, None)
            .await
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::Api {
        status: 200,
        message: format!("unexpected response shape: {}", e),
    })
}
