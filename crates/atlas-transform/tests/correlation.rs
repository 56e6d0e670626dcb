//! Tests for the Pearson correlation engine.

use atlas_model::{AlignedTable, CorrelationBand, CorrelationResult};
use atlas_transform::correlation::pearson;

fn table(rows: &[(i32, Option<f64>, Option<f64>)]) -> AlignedTable {
    let mut table = AlignedTable::new(["A", "B"]);
    for (year, a, b) in rows {
        table.push_row(*year, vec![*a, *b]);
    }
    table
}

#[test]
fn perfect_positive_correlation() {
    let rows = table(&[
        (1, Some(1.0), Some(2.0)),
        (2, Some(2.0), Some(4.0)),
        (3, Some(3.0), Some(6.0)),
    ]);
    let result = pearson(&rows, "A", "B");
    assert!((result.coefficient.unwrap() - 1.0).abs() < 1e-12);
    assert_eq!(result.band(), Some(CorrelationBand::StrongPositive));
}

#[test]
fn perfect_negative_correlation() {
    let rows = table(&[
        (1, Some(1.0), Some(30.0)),
        (2, Some(2.0), Some(20.0)),
        (3, Some(3.0), Some(10.0)),
    ]);
    let result = pearson(&rows, "A", "B");
    assert!((result.coefficient.unwrap() + 1.0).abs() < 1e-12);
    assert_eq!(result.band(), Some(CorrelationBand::StrongNegative));
}

#[test]
fn single_row_is_insufficient() {
    let rows = table(&[(1, Some(1.0), Some(2.0))]);
    assert_eq!(pearson(&rows, "A", "B"), CorrelationResult::insufficient());
    assert_eq!(pearson(&rows, "A", "B").band(), None);
}

#[test]
fn zero_valid_pairs_is_neutral() {
    let rows = table(&[(1, Some(1.0), None), (2, None, Some(4.0))]);
    assert_eq!(
        pearson(&rows, "A", "B"),
        CorrelationResult {
            coefficient: Some(0.0),
            sample_size: 0
        }
    );
}

#[test]
fn only_complete_pairs_are_counted() {
    let rows = table(&[
        (1, Some(1.0), Some(1.0)),
        (2, Some(2.0), None),
        (3, Some(3.0), Some(3.0)),
        (4, Some(f64::NAN), Some(4.0)),
        (5, Some(5.0), Some(5.0)),
    ]);
    let result = pearson(&rows, "A", "B");
    assert_eq!(result.sample_size, 3);
    assert!((result.coefficient.unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn coefficient_is_not_rounded() {
    let rows = table(&[
        (1, Some(1.0), Some(2.0)),
        (2, Some(2.0), Some(1.0)),
        (3, Some(3.0), Some(4.0)),
    ]);
    let r = pearson(&rows, "A", "B").coefficient.unwrap();
    assert!((r - 0.654_653_670_707_977_1).abs() < 1e-12);
}

#[test]
fn unknown_column_is_neutral() {
    let rows = table(&[(1, Some(1.0), Some(2.0)), (2, Some(2.0), Some(3.0))]);
    assert_eq!(pearson(&rows, "A", "C").coefficient, Some(0.0));
}
