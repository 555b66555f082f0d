//! Core type definitions: field values, partitions and typed API responses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field name prefix reserved for the adopter-side partition.
pub const ADOPTER_PREFIX: &str = "adopter_";
/// Field name prefix reserved for the dog-side partition.
pub const DOG_PREFIX: &str = "dog_";

/// A flat profile field mapping, as sent to and received from the service.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Per-field allowed-value lists, as served by `/form/dropdown-values`.
pub type DropdownValues = BTreeMap<String, Vec<String>>;

/// A single profile field value.
///
/// The service treats every field as a string, a number or null; no richer
/// schema is enforced client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Null,
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// String coercion used by dropdown membership checks.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<&FieldValue> for serde_json::Value {
    fn from(v: &FieldValue) -> Self {
        match v {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Number(n) => serde_json::json!(n),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

/// Which partition a field name belongs to, by the reserved prefix
/// convention. Names matching neither prefix are [`FieldCategory::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCategory {
    Adopter,
    Dog,
    Unknown,
}

impl FieldCategory {
    pub fn of(field_name: &str) -> Self {
        if field_name.starts_with(ADOPTER_PREFIX) {
            FieldCategory::Adopter
        } else if field_name.starts_with(DOG_PREFIX) {
            FieldCategory::Dog
        } else {
            FieldCategory::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldCategory::Adopter => "adopter",
            FieldCategory::Dog => "dog",
            FieldCategory::Unknown => "unknown",
        }
    }
}

/// Result of a prediction call. Terminal value; the SDK retains nothing
/// past the call that produced it.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    /// Recommendation label, e.g. "Good Match".
    pub recommendation: String,
    /// Adoption probability in [0, 1].
    pub adoption_probability: f64,
    /// Model confidence in [0, 1].
    pub confidence_score: f64,
    pub model_version: String,
    pub timestamp: String,
    /// Three-band classification info (green / yellow / red).
    #[serde(default)]
    pub simplified_band_info: Option<serde_json::Value>,
    /// Guidance for adoption counselors, present when an explanation was
    /// requested.
    #[serde(default)]
    pub volunteer_guidance: Option<serde_json::Value>,
    #[serde(default)]
    pub transaction_info: Option<serde_json::Value>,
}

/// Response from `/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub uptime: Option<String>,
}

/// Response from `/model/info`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub model_name: String,
    pub model_version: String,
    #[serde(default)]
    pub features_count: u32,
    #[serde(default)]
    pub training_date: Option<String>,
    #[serde(default)]
    pub accuracy_metrics: Option<serde_json::Value>,
}

/// Everything the form layer knows about one field.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    pub field_name: String,
    /// Whether the server declares a dropdown constraint for this field.
    pub is_dropdown: bool,
    /// Allowed values; empty when the field is unconstrained.
    pub allowed_values: Vec<String>,
    /// Current value if set in either partition.
    pub current_value: Option<FieldValue>,
    pub category: FieldCategory,
}
