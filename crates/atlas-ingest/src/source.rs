//! The data source seam and the fallback used by the pipeline.

use atlas_model::IndicatorDetails;
use tracing::warn;

use crate::error::Result;
use crate::payload::{CountryPayload, LatestEntry};

/// Where atlas data comes from.
///
/// `country` is always the backend country name and indicator arguments are
/// dashboard codes (`gdp`, `energy_suply_adeq`, ...).
pub trait DataSource {
    /// Historical record (and backend correlations) of one country.
    fn country_record(&self, country: &str, indicator: &str) -> Result<CountryPayload>;

    /// Latest value of an indicator for every country.
    fn latest(&self, indicator: &str) -> Result<Vec<LatestEntry>>;

    /// Per-indicator observations of one country for the given indicators.
    fn indicators(&self, country: &str, indicators: &[&str]) -> Result<IndicatorDetails>;
}

impl<S: DataSource + ?Sized> DataSource for &S {
    fn country_record(&self, country: &str, indicator: &str) -> Result<CountryPayload> {
        (**self).country_record(country, indicator)
    }

    fn latest(&self, indicator: &str) -> Result<Vec<LatestEntry>> {
        (**self).latest(indicator)
    }

    fn indicators(&self, country: &str, indicators: &[&str]) -> Result<IndicatorDetails> {
        (**self).indicators(country, indicators)
    }
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn country_record(&self, country: &str, indicator: &str) -> Result<CountryPayload> {
        (**self).country_record(country, indicator)
    }

    fn latest(&self, indicator: &str) -> Result<Vec<LatestEntry>> {
        (**self).latest(indicator)
    }

    fn indicators(&self, country: &str, indicators: &[&str]) -> Result<IndicatorDetails> {
        (**self).indicators(country, indicators)
    }
}

/// Logs a failed fetch and substitutes "no data".
///
/// Fetch failures never abort a view; the affected country or indicator
/// simply shows up empty.
pub fn or_no_data<T: Default>(what: &str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!(
                target: "atlas_ingest",
                what,
                error = %err,
                retryable = err.is_retryable(),
                "fetch failed, treating as no data"
            );
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;

    #[test]
    fn failures_become_defaults() {
        let failed: Result<Vec<LatestEntry>> = Err(IngestError::Network("refused".to_string()));
        assert!(or_no_data("latest gdp", failed).is_empty());

        let ok: Result<Vec<LatestEntry>> = Ok(vec![LatestEntry::new("Chile", 1.0)]);
        assert_eq!(or_no_data("latest gdp", ok).len(), 1);
    }
}
