//! Tests for multi-entity alignment.

use atlas_model::{SeriesSet, YearValuePoint};
use atlas_transform::align::build_aligned_table;

fn points(values: &[(i32, f64)]) -> Vec<YearValuePoint> {
    values
        .iter()
        .map(|(year, value)| YearValuePoint::new(*year, *value))
        .collect()
}

#[test]
fn fills_every_year_between_min_and_max() {
    let primary = points(&[(2001, 10.0), (2003, 30.0)]);
    let chile = SeriesSet::new("Chile", points(&[(2002, 20.0)]));
    let table = build_aligned_table("Brazil", &primary, &[chile]);

    assert_eq!(table.columns(), ["Brazil", "Chile"]);
    assert_eq!(table.years(), vec![2001, 2002, 2003]);
    assert_eq!(
        table.column("Brazil").unwrap(),
        vec![Some(10.0), None, Some(30.0)]
    );
    assert_eq!(table.column("Chile").unwrap(), vec![None, Some(20.0), None]);
}

#[test]
fn empty_inputs_give_empty_table() {
    let table = build_aligned_table("Brazil", &[], &[SeriesSet::new("Chile", Vec::new())]);
    assert!(table.is_empty());
    assert_eq!(table.year_domain(), (0, 0));
}

#[test]
fn years_absent_everywhere_still_get_rows() {
    let primary = points(&[(1990, 1.0), (1995, 2.0)]);
    let table = build_aligned_table("Peru", &primary, &[]);
    assert_eq!(table.len(), 6);
    assert!(table.rows()[2].is_all_missing());
}

#[test]
fn entity_without_data_keeps_its_column() {
    let primary = points(&[(2010, 1.0), (2011, 2.0)]);
    let bolivia = SeriesSet::new("Bolivia", Vec::new());
    let table = build_aligned_table("Peru", &primary, &[bolivia]);
    assert_eq!(table.column("Bolivia").unwrap(), vec![None, None]);
}

#[test]
fn comparison_can_widen_the_range() {
    let primary = points(&[(2005, 1.0)]);
    let chile = SeriesSet::new("Chile", points(&[(2001, 4.0), (2008, 5.0)]));
    let table = build_aligned_table("Brazil", &primary, &[chile]);
    assert_eq!(table.year_domain(), (2001, 2008));
    assert_eq!(table.value(4, "Brazil"), Some(1.0));
}

#[test]
fn duplicate_entity_takes_the_later_series() {
    let primary = points(&[(2001, 1.0)]);
    let again = SeriesSet::new("Brazil", points(&[(2001, 9.0)]));
    let table = build_aligned_table("Brazil", &primary, &[again]);
    assert_eq!(table.columns(), ["Brazil"]);
    assert_eq!(table.value(0, "Brazil"), Some(9.0));
}
