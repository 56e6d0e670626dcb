//! Fetch-then-compute orchestration behind each command.
//!
//! Every command fetches everything it needs first and only then runs the
//! pure transforms, so the shared year range is computed over the full set
//! of series. Fetch failures are logged and treated as no data.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use atlas_ingest::{DataSource, or_no_data};
use atlas_model::indicator;
use atlas_model::{CountryDictionary, RawCountryRecord};
use atlas_transform::{
    ComparisonSet, IndicatorSelection, MapSnapshot, TransformError, available_indicators,
    build_country_view, build_indicator_view, chart_title, legend_bucket,
    summarize_backend_correlations,
};
use tracing::{info, info_span, warn};

use crate::types::{IndicatorReport, InsightsReport, MapEntry, MapReport, SeriesReport};

/// A data source plus the lookups every command needs.
pub struct AtlasContext {
    source: Box<dyn DataSource>,
    countries: CountryDictionary,
    max_compare: usize,
}

impl AtlasContext {
    pub fn new(source: Box<dyn DataSource>, max_compare: usize) -> Self {
        Self {
            source,
            countries: CountryDictionary::default(),
            max_compare,
        }
    }

    #[must_use]
    pub fn with_countries(mut self, countries: CountryDictionary) -> Self {
        self.countries = countries;
        self
    }

    pub fn countries(&self) -> &CountryDictionary {
        &self.countries
    }

    /// Country comparison chart of `indicator` for `primary` and `others`.
    pub fn series(&self, primary: &str, others: &[String], indicator: &str) -> Result<SeriesReport> {
        let _span = info_span!("series", primary, indicator).entered();
        warn_unknown_indicator(indicator);

        let mut comparison = ComparisonSet::with_limit(primary, self.max_compare);
        let mut backends = BTreeSet::from([self.countries.backend_name(primary)]);
        for other in others {
            if !backends.insert(self.countries.backend_name(other)) {
                return Err(TransformError::DuplicateEntity(other.clone()))
                    .with_context(|| format!("add {other} to the comparison"));
            }
            comparison
                .add(other.as_str())
                .with_context(|| format!("add {other} to the comparison"))?;
        }

        let records = self.fetch_records(&comparison, indicator);
        let rows = build_country_view(&comparison, indicator, |entity| records.get(entity));
        info!(
            fetched = records.len(),
            requested = comparison.others().len() + 1,
            rows = rows.len(),
            "country comparison built"
        );
        Ok(SeriesReport {
            indicator: indicator.to_string(),
            title: chart_title(indicator),
            primary: primary.to_string(),
            year_domain: rows.year_domain(),
            rows,
        })
    }

    /// Indicator comparison chart of one or two indicators for `country`.
    pub fn indicators(&self, country: &str, keys: &[String]) -> Result<IndicatorReport> {
        let _span = info_span!("indicators", country).entered();
        let selection = IndicatorSelection::from_keys(keys).context("select indicators")?;
        for key in selection.keys() {
            warn_unknown_indicator(key);
        }
        let backend = self.countries.backend_name(country);

        let (record, details) = match &selection {
            IndicatorSelection::None => (None, None),
            IndicatorSelection::Single(key) => {
                let payload = or_no_data(
                    &format!("record of {backend}"),
                    self.source.country_record(backend, key),
                );
                (payload.into_record(), None)
            }
            IndicatorSelection::Pair(first, second) => {
                let details = or_no_data(
                    &format!("indicators of {backend}"),
                    self.source
                        .indicators(backend, &[first.as_str(), second.as_str()])
                        .map(Some),
                );
                (None, details)
            }
        };

        let view = build_indicator_view(&selection, record.as_ref(), details.as_ref());
        let band = view
            .correlation
            .and_then(|correlation| correlation.band())
            .map(|band| band.label().to_string());
        Ok(IndicatorReport {
            country: country.to_string(),
            indicators: selection.keys().into_iter().map(str::to_string).collect(),
            year_domain: view.rows.year_domain(),
            rows: view.rows,
            correlation: view.correlation,
            band,
        })
    }

    /// World map snapshot of `indicator`.
    pub fn latest(&self, indicator: &str) -> MapReport {
        let _span = info_span!("latest", indicator).entered();
        warn_unknown_indicator(indicator);

        let latest = or_no_data(&format!("latest {indicator}"), self.source.latest(indicator));
        let snapshot = MapSnapshot::from_latest(
            latest
                .iter()
                .map(|entry| (entry.country_name.as_str(), entry.value())),
            &self.countries,
        );

        let spec = indicator::lookup(indicator);
        let legend = spec.map_or(&[][..], |spec| spec.legend);
        let entries = snapshot
            .points()
            .iter()
            .map(|point| {
                let bucket = legend_bucket(indicator, point.value);
                MapEntry {
                    point: point.clone(),
                    legend_bucket: bucket,
                    legend_label: bucket
                        .and_then(|index| legend.get(index))
                        .map(|band| band.label),
                }
            })
            .collect();
        MapReport {
            indicator: indicator.to_string(),
            label: spec.map_or_else(|| chart_title(indicator), |spec| spec.map_label.to_string()),
            entries,
        }
    }

    /// Available indicators and backend correlations for `country`.
    pub fn insights(&self, country: &str, indicator: &str) -> InsightsReport {
        let _span = info_span!("insights", country, indicator).entered();
        let backend = self.countries.backend_name(country);
        let payload = or_no_data(
            &format!("record of {backend}"),
            self.source.country_record(backend, indicator),
        );

        InsightsReport {
            country: country.to_string(),
            indicator: indicator.to_string(),
            available: payload
                .record()
                .map(available_indicators)
                .unwrap_or_default()
                .into_iter()
                .collect(),
            correlations: payload
                .correlations
                .as_ref()
                .map(summarize_backend_correlations)
                .unwrap_or_default(),
        }
    }

    /// Fetches the record of every entity in the comparison, keyed by the
    /// entity name as given.
    fn fetch_records(
        &self,
        comparison: &ComparisonSet,
        indicator: &str,
    ) -> BTreeMap<String, RawCountryRecord> {
        std::iter::once(comparison.primary())
            .chain(comparison.others().iter().map(String::as_str))
            .filter_map(|entity| {
                let backend = self.countries.backend_name(entity);
                let payload = or_no_data(
                    &format!("record of {backend}"),
                    self.source.country_record(backend, indicator),
                );
                payload
                    .into_record()
                    .map(|record| (entity.to_string(), record))
            })
            .collect()
    }
}

fn warn_unknown_indicator(key: &str) {
    if indicator::lookup(key).is_none() {
        warn!(indicator = key, "indicator is not in the catalog, using it as the backend prefix");
    }
}
