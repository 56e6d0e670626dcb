//! Integration tests for command orchestration over an in-memory source.

use std::collections::HashMap;

use atlas_cli::pipeline::AtlasContext;
use atlas_ingest::{
    CountryPayload, DataSource, IndicatorsPayload, IngestError, LatestEntry, Result, parse_latest,
};
use atlas_model::{IndicatorDetails, IndicatorKey};
use serde_json::{Value, json};

/// Serves canned payloads keyed by backend country name or indicator code.
#[derive(Default)]
struct FakeSource {
    records: HashMap<String, Value>,
    latest: HashMap<String, Value>,
    indicators: HashMap<String, Value>,
}

impl FakeSource {
    fn with_record(mut self, country: &str, payload: Value) -> Self {
        self.records.insert(country.to_string(), payload);
        self
    }

    fn with_latest(mut self, indicator: &str, payload: Value) -> Self {
        self.latest.insert(indicator.to_string(), payload);
        self
    }

    fn with_indicators(mut self, country: &str, payload: Value) -> Self {
        self.indicators.insert(country.to_string(), payload);
        self
    }
}

impl DataSource for FakeSource {
    fn country_record(&self, country: &str, _indicator: &str) -> Result<CountryPayload> {
        let payload = self
            .records
            .get(country)
            .ok_or_else(|| IngestError::NotFound(country.to_string()))?;
        Ok(serde_json::from_value(payload.clone())?)
    }

    fn latest(&self, indicator: &str) -> Result<Vec<LatestEntry>> {
        let payload = self
            .latest
            .get(indicator)
            .ok_or_else(|| IngestError::Network("connection refused".to_string()))?;
        Ok(parse_latest(payload.clone()))
    }

    fn indicators(&self, country: &str, _indicators: &[&str]) -> Result<IndicatorDetails> {
        let payload = self
            .indicators
            .get(country)
            .ok_or_else(|| IngestError::NotFound(country.to_string()))?;
        let payload: IndicatorsPayload = serde_json::from_value(payload.clone())?;
        payload.into_details()
    }
}

fn context() -> AtlasContext {
    let source = FakeSource::default()
        .with_record(
            "Viet Nam",
            json!({
                "data": [{
                    "Country Name": "Viet Nam",
                    "gdp_percapita_2019": 3400,
                    "gdp_percapita_2021": 3700.5,
                    "population_2019": 96_500_000,
                    "population_2020": 97_300_000,
                    "population_2021": 98_200_000
                }],
                "correlations": {
                    "country_name": "Viet Nam",
                    "gdp_percapita": 0.8123,
                    "poverty": -0.4567,
                    "population": 0.2
                }
            }),
        )
        .with_record(
            "Russian Federation",
            json!({"data": {"gdp_percapita_2020": 10100}}),
        )
        .with_latest(
            "gdp",
            json!([
                {"Country Name": "Viet Nam", "Value": 3700.5},
                {"Country Name": "Albania", "Value": null}
            ]),
        )
        .with_indicators(
            "Viet Nam",
            json!({"details": {
                "gdp": [
                    {"year": 2019, "value": 3400},
                    {"year": 2020, "value": 3550},
                    {"year": 2021, "value": 3700}
                ],
                "poverty": [
                    {"year": "2019", "value": 5.0},
                    {"year": "2020", "value": 4.5},
                    {"year": "2021", "value": 4.0}
                ]
            }}),
        )
        .with_indicators("Russian Federation", json!({"error": "no such country"}));
    AtlasContext::new(Box::new(source), 7)
}

#[test]
fn series_report_snapshot() {
    let report = context()
        .series("Vietnam", &["Russia".to_string()], "gdp")
        .unwrap();

    insta::assert_snapshot!(serde_json::to_string_pretty(&report).unwrap(), @r#"
    {
      "indicator": "gdp",
      "title": "GDP Per Capita Yearly (USD)",
      "primary": "Vietnam",
      "year_domain": [
        2019,
        2021
      ],
      "rows": [
        {
          "year": 2019,
          "Vietnam": 3.4,
          "Russia": null
        },
        {
          "year": 2020,
          "Vietnam": null,
          "Russia": 10.1
        },
        {
          "year": 2021,
          "Vietnam": 3.7005,
          "Russia": null
        }
      ]
    }
    "#);
}

#[test]
fn unreachable_country_keeps_its_column() {
    let report = context()
        .series("Vietnam", &["Atlantis".to_string()], "gdp")
        .unwrap();
    assert_eq!(report.rows.columns(), ["Vietnam", "Atlantis"]);
    assert_eq!(report.rows.column("Atlantis").unwrap(), vec![None, None, None]);
}

#[test]
fn comparison_limit_comes_from_config() {
    let context = AtlasContext::new(Box::new(FakeSource::default()), 1);
    let err = context
        .series("Vietnam", &["Chile".to_string(), "Peru".to_string()], "gdp")
        .unwrap_err();
    assert!(format!("{err:#}").contains("comparison limit of 1"));
}

#[test]
fn aliases_of_one_country_are_rejected() {
    let err = context()
        .series("Vietnam", &["Viet Nam".to_string()], "gdp")
        .unwrap_err();
    assert!(format!("{err:#}").contains("Viet Nam is already part of the comparison"));

    let err = context()
        .series(
            "Brazil",
            &["Russia".to_string(), "Russian Federation".to_string()],
            "gdp",
        )
        .unwrap_err();
    assert!(format!("{err:#}").contains("Russian Federation is already part of the comparison"));
}

#[test]
fn duplicate_indicator_pair_is_rejected() {
    let keys = ["gdp", "gdp"].map(String::from);
    let err = context().indicators("Vietnam", &keys).unwrap_err();
    assert!(format!("{err:#}").contains("gdp is selected twice"));
}

#[test]
fn indicator_pair_is_correlated() {
    let report = context()
        .indicators("Vietnam", &["gdp".to_string(), "poverty".to_string()])
        .unwrap();
    assert_eq!(report.rows.columns(), ["gdp", "poverty"]);
    assert_eq!(report.rows.column("gdp").unwrap(), vec![Some(3.4), Some(3.55), Some(3.7)]);
    let correlation = report.correlation.unwrap();
    assert_eq!(correlation.sample_size, 3);
    assert_eq!(report.band.as_deref(), Some("Strong Negative Correlation"));
}

#[test]
fn single_indicator_reads_the_record() {
    let report = context()
        .indicators("Vietnam", &["population".to_string()])
        .unwrap();
    assert_eq!(report.year_domain, (2019, 2021));
    assert_eq!(report.rows.column("population").unwrap(), vec![Some(96.5), Some(97.3), Some(98.2)]);
    assert!(report.correlation.is_none());
    assert!(report.band.is_none());
}

#[test]
fn upstream_indicator_error_gives_empty_view() {
    let report = context()
        .indicators("Russia", &["gdp".to_string(), "poverty".to_string()])
        .unwrap();
    assert!(report.rows.is_empty());
    assert!(report.correlation.is_none());
}

#[test]
fn three_indicators_are_rejected() {
    let keys = ["gdp", "poverty", "population"].map(String::from);
    assert!(context().indicators("Vietnam", &keys).is_err());
}

#[test]
fn latest_snapshot_is_sorted_and_bucketed() {
    let report = context().latest("gdp");
    assert_eq!(report.label, "GDP per Capita (2024)");
    let names: Vec<&str> = report
        .entries
        .iter()
        .map(|entry| entry.point.country_original.as_str())
        .collect();
    assert_eq!(names, ["Albania", "Viet Nam"]);
    assert_eq!(report.entries[0].legend_bucket, None);
    assert_eq!(report.entries[1].point.x, 2);
    assert_eq!(report.entries[1].legend_label, Some("≤ $5k"));
}

#[test]
fn failed_latest_fetch_is_empty() {
    assert!(context().latest("poverty").entries.is_empty());
}

#[test]
fn insights_list_available_indicators_and_correlations() {
    let report = context().insights("Vietnam", "gdp");
    assert_eq!(report.available, vec![IndicatorKey::Population]);
    let labels: Vec<(&str, f64)> = report
        .correlations
        .iter()
        .map(|summary| (summary.label, summary.value))
        .collect();
    assert_eq!(
        labels,
        [("Country-based context", 0.812), ("Availability", -0.457)]
    );
}
