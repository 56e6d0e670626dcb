//! Integration tests for the public model surface.

use atlas_model::indicator::{self, catalog};
use atlas_model::{AlignedTable, CorrelationResult, IndicatorKey, RawCountryRecord};

#[test]
fn every_indicator_has_a_six_band_legend() {
    for spec in catalog() {
        assert_eq!(spec.legend.len(), 6, "{}", spec.code);
        assert!(spec.legend.last().unwrap().max.is_infinite());
        assert!(spec.chart_divisor >= 1.0);
    }
}

#[test]
fn correlation_labels_are_keyed_by_backend_prefix() {
    assert_eq!(
        indicator::correlation_label_for_prefix("gdp_percapita"),
        Some("Country-based context")
    );
    assert_eq!(
        indicator::correlation_label_for_prefix("max_inflation_shock"),
        Some("Affordability")
    );
    assert_eq!(indicator::correlation_label_for_prefix("gdp"), None);
    assert_eq!(indicator::correlation_label_for_prefix("population"), None);
}

#[test]
fn display_round_trips_through_from_str() {
    for key in IndicatorKey::ALL {
        assert_eq!(key.to_string().parse::<IndicatorKey>().unwrap(), key);
    }
}

#[test]
fn record_collects_from_pairs() {
    let record: RawCountryRecord = [("poverty_2001", 12.5), ("poverty_2002", 11.0)]
        .into_iter()
        .collect();
    assert_eq!(record.len(), 2);
    assert!(record.iter().all(|(key, _)| key.starts_with("poverty_")));
}

#[test]
fn correlation_result_serializes_missing_coefficient_as_null() {
    let json = serde_json::to_string(&CorrelationResult::insufficient()).unwrap();
    assert_eq!(json, r#"{"coefficient":null,"sample_size":0}"#);
}

#[test]
fn mapped_values_keep_missing_slots() {
    let mut table = AlignedTable::new(["A"]);
    table.push_row(2000, vec![Some(2_000.0)]);
    table.push_row(2001, vec![None]);
    let scaled = table.map_values(|_, v| Some(v / 1_000.0));
    assert_eq!(scaled.column("A").unwrap(), vec![Some(2.0), None]);
}
