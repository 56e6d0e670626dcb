//! Multi-entity alignment onto a dense year axis.

use std::collections::BTreeMap;

use atlas_model::{AlignedTable, SeriesSet, YearValuePoint};
use tracing::debug;

/// Joins a primary series and any number of comparison series into one
/// table covering every year from the earliest to the latest observation.
///
/// Columns are the primary id followed by the comparison ids. Every row
/// carries every column; years a series has no value for are `None`. When
/// two series share an id, the later one supplies the values.
pub fn build_aligned_table(
    primary_id: &str,
    primary: &[YearValuePoint],
    comparisons: &[SeriesSet],
) -> AlignedTable {
    let sources: Vec<(&str, BTreeMap<i32, Option<f64>>)> =
        std::iter::once((primary_id, year_map(primary)))
            .chain(
                comparisons
                    .iter()
                    .map(|series| (series.entity_id.as_str(), year_map(&series.points))),
            )
            .collect();

    let mut table = AlignedTable::new(sources.iter().map(|(id, _)| *id));
    let min = sources.iter().filter_map(|(_, map)| map.keys().next()).min();
    let max = sources.iter().filter_map(|(_, map)| map.keys().next_back()).max();
    let (Some(&min), Some(&max)) = (min, max) else {
        return table;
    };

    let slots: Vec<usize> = sources
        .iter()
        .map(|(id, _)| table.column_index(id).unwrap_or_default())
        .collect();
    for year in min..=max {
        let mut values = vec![None; table.columns().len()];
        for ((_, map), slot) in sources.iter().zip(&slots) {
            values[*slot] = map.get(&year).copied().flatten();
        }
        table.push_row(year, values);
    }

    debug!(
        primary = primary_id,
        comparison_count = comparisons.len(),
        min_year = min,
        max_year = max,
        row_count = table.len(),
        "aligned series"
    );
    table
}

fn year_map(points: &[YearValuePoint]) -> BTreeMap<i32, Option<f64>> {
    points.iter().map(|point| (point.year, point.value)).collect()
}
