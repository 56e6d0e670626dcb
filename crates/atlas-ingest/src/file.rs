//! Offline data source backed by a directory of JSON files.
//!
//! Layout:
//!
//! ```text
//! <root>/records/<country-slug>.json     {"data": ..., "correlations": ...}
//! <root>/latest/<indicator>.json         [{"Country Name": ..., "Value": ...}]
//! <root>/indicators/<country-slug>.json  {"details": {...}}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use atlas_model::IndicatorDetails;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::payload::{CountryPayload, IndicatorsPayload, LatestEntry, parse_latest};
use crate::source::DataSource;

/// Reads atlas payloads from a local directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn record_path(&self, country: &str) -> PathBuf {
        self.root
            .join("records")
            .join(format!("{}.json", slug(country)))
    }

    pub fn latest_path(&self, indicator: &str) -> PathBuf {
        self.root
            .join("latest")
            .join(format!("{}.json", slug(indicator)))
    }

    pub fn indicators_path(&self, country: &str) -> PathBuf {
        self.root
            .join("indicators")
            .join(format!("{}.json", slug(country)))
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        debug!(path = %path.display(), "reading data file");
        if !path.is_file() {
            return Err(IngestError::NotFound(path.display().to_string()));
        }
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| IngestError::Json(format!("{}: {e}", path.display())))
    }
}

impl DataSource for FileSource {
    /// Records hold every indicator, so `indicator` is not needed here.
    fn country_record(&self, country: &str, _indicator: &str) -> Result<CountryPayload> {
        self.read_json(&self.record_path(country))
    }

    fn latest(&self, indicator: &str) -> Result<Vec<LatestEntry>> {
        let body: Value = self.read_json(&self.latest_path(indicator))?;
        Ok(parse_latest(body))
    }

    fn indicators(&self, country: &str, indicators: &[&str]) -> Result<IndicatorDetails> {
        let payload: IndicatorsPayload = self.read_json(&self.indicators_path(country))?;
        let mut details = payload.into_details()?;
        details.retain(|key, _| indicators.iter().any(|wanted| key.as_str() == *wanted));
        Ok(details)
    }
}

/// File name stem for a country or indicator: lowercase, with every run of
/// non-alphanumeric characters collapsed to `_` and no leading or trailing `_`.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }
    out
}
