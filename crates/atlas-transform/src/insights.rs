//! Secondary dashboard computations: which indicators a country actually has
//! data for, the backend's own correlation summary, and the world-map snapshot.

use std::collections::{BTreeMap, BTreeSet};

use atlas_model::indicator::{self, IndicatorKey};
use atlas_model::{CountryDictionary, RawCountryRecord};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::extract::extract_series;

/// An indicator is offered only when it has at least this many observations.
pub const MIN_DATA_POINTS: usize = 3;

/// Catalog indicators with at least [`MIN_DATA_POINTS`] numeric observations
/// in `record`.
pub fn available_indicators(record: &RawCountryRecord) -> BTreeSet<IndicatorKey> {
    IndicatorKey::ALL
        .into_iter()
        .filter(|key| extract_series(Some(record), key.as_str()).len() >= MIN_DATA_POINTS)
        .collect()
}

/// One line of the backend correlation summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationSummary {
    pub label: &'static str,
    pub value: f64,
}

/// Turns the backend `correlations` object into labelled entries, strongest first.
///
/// Keys are backend prefixes; the `country_name` entry, non-numeric values
/// and prefixes without a label are skipped. Values are rounded to three
/// decimals.
pub fn summarize_backend_correlations(
    correlations: &BTreeMap<String, Value>,
) -> Vec<CorrelationSummary> {
    let mut summary: Vec<CorrelationSummary> = correlations
        .iter()
        .filter(|(key, _)| key.as_str() != "country_name")
        .filter_map(|(key, value)| {
            let value = value.as_f64().filter(|v| v.is_finite())?;
            let label = indicator::correlation_label_for_prefix(key)?;
            Some(CorrelationSummary {
                label,
                value: round_to(value, 3),
            })
        })
        .collect();
    summary.sort_by(|a, b| b.value.abs().total_cmp(&a.value.abs()));
    summary
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// A point of the indexed world scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: usize,
    /// Backend name.
    pub country: String,
    /// Name exactly as reported by `/latest`.
    pub country_original: String,
    pub value: Option<f64>,
}

/// Latest value of one indicator for every country.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapSnapshot {
    values: BTreeMap<String, Option<f64>>,
    points: Vec<ScatterPoint>,
}

impl MapSnapshot {
    /// Builds the snapshot from `(country name, value)` pairs.
    ///
    /// Values are keyed by backend name. Scatter points are ordered by the
    /// reported name and numbered from 1.
    pub fn from_latest<'a, I>(entries: I, dictionary: &CountryDictionary) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<f64>)>,
    {
        let mut entries: Vec<(&str, Option<f64>)> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut values = BTreeMap::new();
        let mut points = Vec::with_capacity(entries.len());
        for (position, (name, value)) in entries.into_iter().enumerate() {
            let backend = dictionary.backend_name(name).to_string();
            values.insert(backend.clone(), value);
            points.push(ScatterPoint {
                x: position + 1,
                country: backend,
                country_original: name.to_string(),
                value,
            });
        }
        debug!(country_count = values.len(), "built map snapshot");
        Self { values, points }
    }

    /// Latest value for a country, accepting either a common or a backend name.
    pub fn value_for(&self, country: &str, dictionary: &CountryDictionary) -> Option<f64> {
        self.values
            .get(dictionary.backend_name(country))
            .copied()
            .flatten()
    }

    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Index of the first legend band of `indicator_key` whose upper bound is at
/// least the raw latest `value` (scaled by the catalog's map divisor).
pub fn legend_bucket(indicator_key: &str, value: Option<f64>) -> Option<usize> {
    let value = value.filter(|v| !v.is_nan())?;
    let spec = indicator::lookup(indicator_key)?;
    let scaled = value / spec.map_divisor;
    spec.legend.iter().position(|band| scaled <= band.max)
}

/// Chart heading for an indicator.
pub fn chart_title(indicator_key: &str) -> String {
    match indicator::lookup(indicator_key) {
        Some(spec) => spec.chart_title.to_string(),
        None => indicator_key.replace('_', " "),
    }
}
