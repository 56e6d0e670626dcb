//! Raw records and extracted year series.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A flat per-country record as returned by the backend.
///
/// Keys of the form `{backend_prefix}_{YYYY}` carry indicator values; every
/// other key (country name, ISO codes, ...) is incidental and ignored by the
/// pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawCountryRecord {
    fields: BTreeMap<String, Value>,
}

impl RawCountryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field, returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawCountryRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// One year of one series.
///
/// `value` is only `None` for placeholders introduced by alignment;
/// extraction never emits a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValuePoint {
    pub year: i32,
    pub value: Option<f64>,
}

impl YearValuePoint {
    pub fn new(year: i32, value: f64) -> Self {
        Self {
            year,
            value: Some(value),
        }
    }

    pub fn missing(year: i32) -> Self {
        Self { year, value: None }
    }
}

/// The series of one entity (country) for the indicator currently of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    pub entity_id: String,
    /// Sorted ascending by year.
    pub points: Vec<YearValuePoint>,
}

impl SeriesSet {
    pub fn new(entity_id: impl Into<String>, points: Vec<YearValuePoint>) -> Self {
        Self {
            entity_id: entity_id.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value at `year`, if the series has a point there.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.points
            .binary_search_by_key(&year, |point| point.year)
            .ok()
            .and_then(|idx| self.points[idx].value)
    }
}

/// One `{year, value}` observation from the per-indicator payload.
///
/// Both fields are kept as raw JSON: years may arrive as integers or as
/// strings containing a four-digit year, and values may be null or textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorObservation {
    #[serde(default)]
    pub year: Value,
    #[serde(default)]
    pub value: Value,
}

impl IndicatorObservation {
    pub fn new(year: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            year: year.into(),
            value: value.into(),
        }
    }
}

/// Observations per indicator key, as returned by the indicators endpoint.
pub type IndicatorDetails = BTreeMap<String, Vec<IndicatorObservation>>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_deserializes_from_flat_object() {
        let record: RawCountryRecord = serde_json::from_value(json!({
            "country_name": "Brazil",
            "gdp_percapita_2001": 5000,
            "gdp_percapita_2002": null
        }))
        .unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("gdp_percapita_2001"), Some(&json!(5000)));
        assert_eq!(record.get("gdp_percapita_2002"), Some(&Value::Null));
    }

    #[test]
    fn series_value_lookup() {
        let series = SeriesSet::new(
            "Brazil",
            vec![YearValuePoint::new(2001, 1.0), YearValuePoint::new(2003, 3.0)],
        );
        assert_eq!(series.value_at(2003), Some(3.0));
        assert_eq!(series.value_at(2002), None);
    }
}
