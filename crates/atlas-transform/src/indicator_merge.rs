//! Alignment across indicators for the indicator comparison view.
//!
//! Unlike entity alignment, this merge emits only years observed by at least
//! one indicator (no dense range), omits unusable observations instead of
//! storing them, and drops rows where every indicator is missing.

use std::collections::{BTreeMap, BTreeSet};

use atlas_model::{AlignedTable, IndicatorDetails, IndicatorObservation};
use tracing::debug;

use crate::numeric::{coerce_number, parse_year};

/// Merges per-indicator observations into one table with a column per indicator.
///
/// Columns follow the key order of `details`. Observations with an
/// unparseable year or a non-numeric value are skipped; they never abort
/// the merge.
pub fn build_indicator_table(details: &IndicatorDetails) -> AlignedTable {
    let maps: Vec<(&str, BTreeMap<i32, f64>)> = details
        .iter()
        .map(|(key, observations)| (key.as_str(), observation_map(observations)))
        .collect();

    let years: BTreeSet<i32> = maps
        .iter()
        .flat_map(|(_, map)| map.keys().copied())
        .collect();

    let mut table = AlignedTable::new(maps.iter().map(|(key, _)| *key));
    for year in years {
        let values: Vec<Option<f64>> = maps.iter().map(|(_, map)| map.get(&year).copied()).collect();
        if values.iter().any(Option::is_some) {
            table.push_row(year, values);
        }
    }

    debug!(
        indicator_count = maps.len(),
        row_count = table.len(),
        "merged indicators"
    );
    table
}

fn observation_map(observations: &[IndicatorObservation]) -> BTreeMap<i32, f64> {
    observations
        .iter()
        .filter_map(|observation| {
            let year = parse_year(&observation.year)?;
            let value = coerce_number(&observation.value)?;
            Some((year, value))
        })
        .collect()
}
