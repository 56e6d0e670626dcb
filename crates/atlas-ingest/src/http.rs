//! Blocking HTTP client for the atlas backend API.

use std::time::Duration;

use atlas_model::IndicatorDetails;
use atlas_model::indicator;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::payload::{CountryPayload, IndicatorsPayload, LatestEntry, parse_latest};
use crate::source::DataSource;

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT_VALUE: &str = concat!("indicator-atlas/", env!("CARGO_PKG_VERSION"));

/// Client for the `/data/all_data_merged`, `/latest` and `/indicators` endpoints.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Creates a client for `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IngestError::Network(format!("failed to create HTTP client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds an endpoint URL with query parameters. Repeated keys are kept.
    pub fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse_with_params(&raw, params)
            .map_err(|e| IngestError::InvalidUrl(format!("{raw}: {e}")))
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "fetching");
        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json()?)
    }
}

impl DataSource for HttpSource {
    fn country_record(&self, country: &str, indicator: &str) -> Result<CountryPayload> {
        let url = self.endpoint(
            "data/all_data_merged",
            &[
                ("country", country),
                ("indicator", indicator::backend_prefix(indicator)),
            ],
        )?;
        self.get_json(url)
    }

    fn latest(&self, indicator: &str) -> Result<Vec<LatestEntry>> {
        let url = self.endpoint("latest", &[("indicator", indicator)])?;
        let body: Value = self.get_json(url)?;
        Ok(parse_latest(body))
    }

    fn indicators(&self, country: &str, indicators: &[&str]) -> Result<IndicatorDetails> {
        let params: Vec<(&str, &str)> = std::iter::once(("country", country))
            .chain(indicators.iter().map(|indicator| ("indicators", *indicator)))
            .collect();
        let url = self.endpoint("indicators", &params)?;
        let payload: IndicatorsPayload = self.get_json(url)?;
        payload.into_details()
    }
}
