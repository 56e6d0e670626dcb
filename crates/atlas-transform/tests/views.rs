//! Tests for the country and indicator comparison views.

use std::collections::HashMap;

use atlas_model::{CorrelationBand, IndicatorDetails, IndicatorObservation, RawCountryRecord};
use atlas_transform::views::{
    ComparisonSet, IndicatorSelection, build_country_view, build_indicator_view,
};

fn records() -> HashMap<String, RawCountryRecord> {
    let mut records = HashMap::new();
    records.insert(
        "Brazil".to_string(),
        RawCountryRecord::new()
            .with("population_2001", 175_000_000)
            .with("population_2003", 180_000_000)
            .with("poverty_2001", 12.0)
            .with("poverty_2003", 11.5),
    );
    records.insert(
        "Chile".to_string(),
        RawCountryRecord::new().with("population_2002", 15_500_000),
    );
    records
}

#[test]
fn country_view_is_aligned_and_scaled() {
    let records = records();
    let mut comparison = ComparisonSet::new("Brazil");
    comparison.add("Chile").unwrap();
    comparison.add("Atlantis").unwrap();

    let table = build_country_view(&comparison, "population", |name| records.get(name));
    assert_eq!(table.columns(), ["Brazil", "Chile", "Atlantis"]);
    assert_eq!(table.years(), vec![2001, 2002, 2003]);
    assert_eq!(table.column("Brazil").unwrap(), vec![Some(175.0), None, Some(180.0)]);
    assert_eq!(table.column("Chile").unwrap(), vec![None, Some(15.5), None]);
    assert_eq!(table.column("Atlantis").unwrap(), vec![None, None, None]);
    assert_eq!(table.year_domain(), (2001, 2003));
}

#[test]
fn country_view_without_primary_record_is_empty() {
    let comparison = ComparisonSet::new("Nowhere");
    let table = build_country_view(&comparison, "gdp", |_| None);
    assert!(table.is_empty());
    assert_eq!(table.year_domain(), (0, 0));
}

#[test]
fn comparison_limit_is_seven() {
    let mut comparison = ComparisonSet::new("Brazil");
    for name in ["A", "B", "C", "D", "E", "F", "G"] {
        comparison.add(name).unwrap();
    }
    assert!(comparison.add("H").is_err());
    comparison.clear();
    assert!(comparison.others().is_empty());
}

#[test]
fn single_indicator_uses_record_fast_path() {
    let records = records();
    let selection = IndicatorSelection::from_keys(&["population"]).unwrap();
    let view = build_indicator_view(&selection, records.get("Brazil"), None);

    assert_eq!(view.rows.years(), vec![2001, 2003]);
    assert_eq!(view.rows.column("population").unwrap(), vec![Some(175.0), Some(180.0)]);
    assert!(view.correlation.is_none());
}

#[test]
fn pair_is_merged_projected_and_correlated() {
    let mut details = IndicatorDetails::new();
    details.insert(
        "gdp".to_string(),
        vec![
            IndicatorObservation::new(2001, 4000),
            IndicatorObservation::new(2002, 5000),
            IndicatorObservation::new(2003, 6000),
        ],
    );
    details.insert(
        "poverty".to_string(),
        vec![
            IndicatorObservation::new(2001, 15.0),
            IndicatorObservation::new(2002, 12.0),
            IndicatorObservation::new(2003, 9.0),
        ],
    );
    details.insert(
        "population".to_string(),
        vec![IndicatorObservation::new(1999, 1_000_000)],
    );

    let selection = IndicatorSelection::from_keys(&["poverty", "gdp"]).unwrap();
    let view = build_indicator_view(&selection, None, Some(&details));

    assert_eq!(view.rows.columns(), ["poverty", "gdp"]);
    assert_eq!(view.rows.years(), vec![2001, 2002, 2003]);
    assert_eq!(view.rows.column("gdp").unwrap(), vec![Some(4.0), Some(5.0), Some(6.0)]);

    let correlation = view.correlation.unwrap();
    assert_eq!(correlation.sample_size, 3);
    assert!((correlation.coefficient.unwrap() + 1.0).abs() < 1e-12);
    assert_eq!(correlation.band(), Some(CorrelationBand::StrongNegative));
}

#[test]
fn pair_without_payload_is_empty() {
    let selection = IndicatorSelection::Pair("gdp".into(), "poverty".into());
    let view = build_indicator_view(&selection, None, None);
    assert!(view.rows.is_empty());
    assert!(view.correlation.is_none());
}

#[test]
fn empty_selection_is_empty() {
    let records = records();
    let view = build_indicator_view(&IndicatorSelection::None, records.get("Brazil"), None);
    assert!(view.rows.is_empty());
    assert_eq!(view.rows.year_domain(), (0, 0));
}
