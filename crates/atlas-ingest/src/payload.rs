//! Wire shapes of the atlas backend.
//!
//! The backend is loose about shapes: `data` may be one record or a list,
//! `/latest` may return something other than an array, and `details` entries
//! may be missing or malformed. Parsing here is lenient and leaves value
//! coercion to the transform layer.

use std::collections::BTreeMap;

use atlas_model::{IndicatorDetails, IndicatorObservation, RawCountryRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Either a single item or a list of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Payload of `/data/all_data_merged`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryPayload {
    #[serde(default)]
    pub data: Option<OneOrMany<RawCountryRecord>>,
    /// Precomputed correlations keyed by backend prefix.
    #[serde(default)]
    pub correlations: Option<BTreeMap<String, Value>>,
}

impl CountryPayload {
    /// The historical record: `data` itself, or the first element of a list.
    pub fn record(&self) -> Option<&RawCountryRecord> {
        match self.data.as_ref()? {
            OneOrMany::One(record) => Some(record),
            OneOrMany::Many(records) => records.first(),
        }
    }

    pub fn into_record(self) -> Option<RawCountryRecord> {
        match self.data? {
            OneOrMany::One(record) => Some(record),
            OneOrMany::Many(records) => records.into_iter().next(),
        }
    }
}

/// One entry of `/latest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestEntry {
    #[serde(rename = "Country Name")]
    pub country_name: String,
    #[serde(rename = "Value", default)]
    pub value: Value,
}

impl LatestEntry {
    pub fn new(country_name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            country_name: country_name.into(),
            value: value.into(),
        }
    }

    /// Numeric value, if the backend sent a finite number.
    pub fn value(&self) -> Option<f64> {
        self.value.as_f64().filter(|v| v.is_finite())
    }
}

/// Parses a `/latest` body. A non-array body is treated as no data and
/// entries without a country name are skipped.
pub fn parse_latest(body: Value) -> Vec<LatestEntry> {
    let Value::Array(items) = body else {
        debug!("latest payload is not an array");
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

/// Payload of `/indicators`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorsPayload {
    #[serde(default)]
    pub details: Option<BTreeMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl IndicatorsPayload {
    /// Converts into per-indicator observations.
    ///
    /// An `error` field becomes [`IngestError::Upstream`]. Entries that are
    /// not arrays become empty, and array items that are not objects are
    /// skipped.
    pub fn into_details(self) -> Result<IndicatorDetails> {
        if let Some(error) = self.error.filter(|error| !error.is_null()) {
            let message = match error {
                Value::String(message) => message,
                other => other.to_string(),
            };
            return Err(IngestError::Upstream(message));
        }
        Ok(self
            .details
            .unwrap_or_default()
            .into_iter()
            .map(|(key, entries)| (key, observations(entries)))
            .collect())
    }
}

fn observations(entries: Value) -> Vec<IndicatorObservation> {
    match entries {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}
