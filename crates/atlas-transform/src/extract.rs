//! Series extraction from flat `{prefix}_{YYYY}` records.

use atlas_model::indicator;
use atlas_model::{RawCountryRecord, SeriesSet, YearValuePoint};
use tracing::debug;

use crate::numeric::coerce_number;

/// Extracts one indicator's year series from a raw record.
///
/// The indicator key is resolved to its backend prefix (unknown keys are
/// used verbatim) and every `{prefix}_{YYYY}` field with a numeric value
/// becomes a point. Null and non-numeric values are dropped. A missing
/// record yields an empty series. Points are sorted by year.
pub fn extract_series(record: Option<&RawCountryRecord>, indicator_key: &str) -> Vec<YearValuePoint> {
    let Some(record) = record else {
        return Vec::new();
    };
    let prefix = indicator::backend_prefix(indicator_key);

    let mut points: Vec<YearValuePoint> = record
        .iter()
        .filter_map(|(key, value)| {
            let year = match_year_key(key, prefix)?;
            let value = coerce_number(value)?;
            Some(YearValuePoint::new(year, value))
        })
        .collect();
    points.sort_by_key(|point| point.year);

    debug!(
        indicator = indicator_key,
        prefix,
        field_count = record.len(),
        point_count = points.len(),
        "extracted series"
    );
    points
}

/// Extracts a series and tags it with its entity.
pub fn extract_series_set(
    entity_id: &str,
    record: Option<&RawCountryRecord>,
    indicator_key: &str,
) -> SeriesSet {
    SeriesSet::new(entity_id, extract_series(record, indicator_key))
}

/// Returns the year of a key shaped exactly `{prefix}_{YYYY}`.
pub fn match_year_key(key: &str, prefix: &str) -> Option<i32> {
    let digits = key.strip_prefix(prefix)?.strip_prefix('_')?;
    if digits.len() == 4 && digits.bytes().all(|byte| byte.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_key_shape() {
        assert_eq!(match_year_key("gdp_percapita_2001", "gdp_percapita"), Some(2001));
        assert_eq!(match_year_key("gdp_percapita_201", "gdp_percapita"), None);
        assert_eq!(match_year_key("gdp_percapita_20011", "gdp_percapita"), None);
        assert_eq!(match_year_key("gdp_percapita2001", "gdp_percapita"), None);
        assert_eq!(match_year_key("gdp_percapita_2001", "gdp"), None);
        assert_eq!(match_year_key("xgdp_percapita_2001", "gdp_percapita"), None);
    }
}
