//! Unit normalization and display formatting.
//!
//! Scales come from the indicator catalog: GDP and food calories are charted
//! in thousands, population in millions, everything else as-is.

use atlas_model::AlignedTable;
use atlas_model::indicator;

use crate::numeric::format_fixed;

/// Converts a raw value of `indicator_key` to its chart unit. `None` stays `None`.
pub fn convert_for_chart(indicator_key: &str, value: Option<f64>) -> Option<f64> {
    value.map(|v| v / indicator::chart_scale(indicator_key))
}

/// Scales every column of an entity-aligned table with the rule of the
/// selected indicator. All columns hold the same indicator, so the scale is
/// indicator-specific and never entity-specific.
#[must_use]
pub fn normalize_table(table: &AlignedTable, indicator_key: &str) -> AlignedTable {
    table.map_values(|_, value| convert_for_chart(indicator_key, Some(value)))
}

/// Scales an indicator-aligned table, where each column is named after the
/// indicator it holds.
#[must_use]
pub fn normalize_indicator_columns(table: &AlignedTable) -> AlignedTable {
    table.map_values(|column, value| convert_for_chart(column, Some(value)))
}

/// Renders an already-converted value with its indicator's precision and suffix.
///
/// `population` → `"213M"`, `food_calories` → `"3.2k"`, `gdp` → `"22k USD"`,
/// anything else → `"12.35%"`. Missing values render as an empty string and
/// non-finite values as zero.
pub fn format_value(indicator_key: &str, value: Option<f64>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let value = if value.is_finite() { value } else { 0.0 };
    let format = indicator::display_format(indicator_key);
    let number = format_fixed(value, format.precision, format.strip_trailing_zero);
    format!("{number}{}", format.suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_known_scales() {
        assert_eq!(convert_for_chart("population", Some(213_000_000.0)), Some(213.0));
        assert_eq!(convert_for_chart("gdp", Some(22_000.0)), Some(22.0));
        assert_eq!(convert_for_chart("food_calories", Some(3_200.0)), Some(3.2));
        assert_eq!(convert_for_chart("poverty", Some(12.345)), Some(12.345));
        assert_eq!(convert_for_chart("population", None), None);
    }

    #[test]
    fn formats_with_indicator_rules() {
        assert_eq!(format_value("population", Some(213.0)), "213M");
        assert_eq!(format_value("population", Some(1.24)), "1.2M");
        assert_eq!(format_value("food_calories", Some(3.2)), "3.2k");
        assert_eq!(format_value("gdp", Some(22.04)), "22k USD");
        assert_eq!(format_value("poverty", Some(12.346)), "12.35%");
        assert_eq!(format_value("undernourishment", Some(f64::NAN)), "0.00%");
        assert_eq!(format_value("gdp", None), "");
    }

    #[test]
    fn halfway_values_round_up() {
        assert_eq!(format_value("population", Some(2.25)), "2.3M");
        assert_eq!(format_value("poverty", Some(0.125)), "0.13%");
        assert_eq!(format_value("poverty", Some(1.125)), "1.13%");
    }
}
