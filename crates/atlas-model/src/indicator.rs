//! Indicator catalog.
//!
//! Every socio-economic indicator the atlas knows about is described by a
//! single [`IndicatorSpec`] row. Scaling, display formatting, chart titles and
//! map legends are all driven from this table, so adding an indicator is a
//! data edit rather than another branch in each consumer.
//!
//! Keys that are not in the catalog are still accepted by the string-keyed
//! helpers ([`backend_prefix`], [`chart_scale`], [`display_format`]): they use
//! the key itself as the backend prefix, no scaling, and percent formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Short indicator code as used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKey {
    /// Prevalence of undernourishment (%).
    Undernourishment,
    /// Poverty headcount ratio (%).
    Poverty,
    /// GDP per capita (USD).
    Gdp,
    /// Total population.
    Population,
    /// Mean consumer price inflation (%).
    MeanInflation,
    /// Maximum inflation shock (%).
    MaxInflation,
    /// Food calories available per person per day.
    FoodCalories,
    /// Average dietary energy supply adequacy (%).
    #[serde(rename = "energy_suply_adeq")]
    EnergySupplyAdequacy,
}

impl IndicatorKey {
    /// All catalog indicators in display order.
    pub const ALL: [IndicatorKey; 8] = [
        IndicatorKey::Undernourishment,
        IndicatorKey::Poverty,
        IndicatorKey::Gdp,
        IndicatorKey::Population,
        IndicatorKey::MeanInflation,
        IndicatorKey::MaxInflation,
        IndicatorKey::FoodCalories,
        IndicatorKey::EnergySupplyAdequacy,
    ];

    /// Returns the short code (`gdp`, `energy_suply_adeq`, ...).
    pub fn as_str(&self) -> &'static str {
        self.spec().code
    }

    /// Returns the catalog row for this indicator.
    pub fn spec(&self) -> &'static IndicatorSpec {
        // Catalog order matches `ALL`, asserted in tests.
        &CATALOG[*self as usize]
    }

    /// Returns the prefix the backend uses for `{prefix}_{year}` keys.
    pub fn backend_prefix(&self) -> &'static str {
        self.spec().backend_prefix
    }
}

impl fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IndicatorKey {
    type Err = ModelError;

    /// Parses a short code. Matching is exact after trimming; backend
    /// prefixes are not accepted here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        CATALOG
            .iter()
            .find(|spec| spec.code == code)
            .map(|spec| spec.key)
            .ok_or_else(|| ModelError::UnknownIndicator(s.to_string()))
    }
}

/// Numeric display rules for an indicator's converted values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayFormat {
    /// Decimal places.
    pub precision: usize,
    /// Appended after the number.
    pub suffix: &'static str,
    /// Drop a trailing `.0` (only meaningful with one decimal place).
    pub strip_trailing_zero: bool,
}

/// Percent-like values: two decimals and a `%` suffix.
pub const PERCENT_FORMAT: DisplayFormat = DisplayFormat {
    precision: 2,
    suffix: "%",
    strip_trailing_zero: false,
};

/// One band of a choropleth legend: values `<= max` fall into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendBand {
    pub max: f64,
    pub label: &'static str,
}

const fn band(max: f64, label: &'static str) -> LegendBand {
    LegendBand { max, label }
}

/// A row of the indicator catalog.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSpec {
    pub key: IndicatorKey,
    pub code: &'static str,
    pub backend_prefix: &'static str,
    /// Raw values are divided by this before charting.
    pub chart_divisor: f64,
    pub format: DisplayFormat,
    pub chart_title: &'static str,
    pub map_label: &'static str,
    /// Raw latest values are divided by this before the legend lookup.
    pub map_divisor: f64,
    pub legend: &'static [LegendBand],
    /// Label used when the backend reports a correlation against this indicator.
    pub correlation_label: Option<&'static str>,
}

static CATALOG: [IndicatorSpec; 8] = [
    IndicatorSpec {
        key: IndicatorKey::Undernourishment,
        code: "undernourishment",
        backend_prefix: "undernourishment",
        chart_divisor: 1.0,
        format: PERCENT_FORMAT,
        chart_title: "Undernourishment (%)",
        map_label: "Undernourishment (2022)",
        map_divisor: 1.0,
        legend: &[
            band(2.5, "≤ 2.5%"),
            band(5.0, "≤ 5%"),
            band(10.0, "≤ 10%"),
            band(20.0, "≤ 20%"),
            band(40.0, "≤ 40%"),
            band(f64::INFINITY, "> 40%"),
        ],
        correlation_label: None,
    },
    IndicatorSpec {
        key: IndicatorKey::Poverty,
        code: "poverty",
        backend_prefix: "poverty",
        chart_divisor: 1.0,
        format: PERCENT_FORMAT,
        chart_title: "Poverty Rate (%)",
        map_label: "Poverty Rate (Latest)",
        map_divisor: 1.0,
        legend: &[
            band(5.0, "≤ 5%"),
            band(10.0, "≤ 10%"),
            band(20.0, "≤ 20%"),
            band(30.0, "≤ 30%"),
            band(50.0, "≤ 50%"),
            band(f64::INFINITY, "> 50%"),
        ],
        correlation_label: Some("Availability"),
    },
    IndicatorSpec {
        key: IndicatorKey::Gdp,
        code: "gdp",
        backend_prefix: "gdp_percapita",
        chart_divisor: 1_000.0,
        format: DisplayFormat {
            precision: 1,
            suffix: "k USD",
            strip_trailing_zero: true,
        },
        chart_title: "GDP Per Capita Yearly (USD)",
        map_label: "GDP per Capita (2024)",
        map_divisor: 1.0,
        legend: &[
            band(5_000.0, "≤ $5k"),
            band(10_000.0, "≤ $10k"),
            band(20_000.0, "≤ $20k"),
            band(40_000.0, "≤ $40k"),
            band(60_000.0, "≤ $60k"),
            band(f64::INFINITY, "> $60k"),
        ],
        correlation_label: Some("Country-based context"),
    },
    IndicatorSpec {
        key: IndicatorKey::Population,
        code: "population",
        backend_prefix: "population",
        chart_divisor: 1_000_000.0,
        format: DisplayFormat {
            precision: 1,
            suffix: "M",
            strip_trailing_zero: true,
        },
        chart_title: "Population (Millions of People)",
        map_label: "Population (2024)",
        map_divisor: 1_000_000.0,
        legend: &[
            band(1.0, "≤ 1M"),
            band(5.0, "≤ 5M"),
            band(20.0, "≤ 20M"),
            band(50.0, "≤ 50M"),
            band(100.0, "≤ 100M"),
            band(f64::INFINITY, "> 100M"),
        ],
        correlation_label: None,
    },
    IndicatorSpec {
        key: IndicatorKey::MeanInflation,
        code: "mean_inflation",
        backend_prefix: "mean_inflation_rate",
        chart_divisor: 1.0,
        format: PERCENT_FORMAT,
        chart_title: "Mean Inflation Rate (%)",
        map_label: "Mean Inflation (2024)",
        map_divisor: 1.0,
        legend: &[
            band(2.0, "≤ 2%"),
            band(5.0, "≤ 5%"),
            band(10.0, "≤ 10%"),
            band(20.0, "≤ 20%"),
            band(40.0, "≤ 40%"),
            band(f64::INFINITY, "> 40%"),
        ],
        correlation_label: None,
    },
    IndicatorSpec {
        key: IndicatorKey::MaxInflation,
        code: "max_inflation",
        backend_prefix: "max_inflation_shock",
        chart_divisor: 1.0,
        format: PERCENT_FORMAT,
        chart_title: "Maximum Inflation Shock (%)",
        map_label: "Max Inflation (2024)",
        map_divisor: 1.0,
        legend: &[
            band(5.0, "≤ 5%"),
            band(10.0, "≤ 10%"),
            band(20.0, "≤ 20%"),
            band(40.0, "≤ 40%"),
            band(80.0, "≤ 80%"),
            band(f64::INFINITY, "> 80%"),
        ],
        correlation_label: Some("Affordability"),
    },
    IndicatorSpec {
        key: IndicatorKey::FoodCalories,
        code: "food_calories",
        backend_prefix: "food_calories",
        chart_divisor: 1_000.0,
        format: DisplayFormat {
            precision: 1,
            suffix: "k",
            strip_trailing_zero: true,
        },
        chart_title: "Food Calories Available Daily (%)",
        map_label: "Food Calories (2022)",
        map_divisor: 1.0,
        legend: &[
            band(2_200.0, "≤ 2200"),
            band(2_600.0, "≤ 2600"),
            band(3_000.0, "≤ 3000"),
            band(3_400.0, "≤ 3400"),
            band(3_800.0, "≤ 3800"),
            band(f64::INFINITY, "> 3800"),
        ],
        correlation_label: None,
    },
    IndicatorSpec {
        key: IndicatorKey::EnergySupplyAdequacy,
        code: "energy_suply_adeq",
        backend_prefix: "energy_supply_adeq",
        chart_divisor: 1.0,
        format: PERCENT_FORMAT,
        chart_title: "Average Dietary Energy Supply Adequacy (%)",
        map_label: "Energy Supply Adeq. (2023)",
        map_divisor: 1.0,
        legend: &[
            band(90.0, "≤ 90%"),
            band(100.0, "≤ 100%"),
            band(120.0, "≤ 120%"),
            band(140.0, "≤ 140%"),
            band(160.0, "≤ 160%"),
            band(f64::INFINITY, "> 160%"),
        ],
        correlation_label: Some("Utilization"),
    },
];

/// Returns the whole catalog in display order.
pub fn catalog() -> &'static [IndicatorSpec] {
    &CATALOG
}

/// Looks up a catalog row by short code.
pub fn lookup(code: &str) -> Option<&'static IndicatorSpec> {
    CATALOG.iter().find(|spec| spec.code == code)
}

/// Resolves a short code to its backend prefix.
///
/// Unknown codes resolve to themselves. This keeps `{key}_{year}` lookups
/// working for indicators whose backend prefix equals the short code, and
/// silently matches nothing for the ones that differ.
pub fn backend_prefix(code: &str) -> &str {
    match lookup(code) {
        Some(spec) => spec.backend_prefix,
        None => code,
    }
}

/// Divisor applied to raw values of `code` before charting (1 for unknown codes).
pub fn chart_scale(code: &str) -> f64 {
    lookup(code).map_or(1.0, |spec| spec.chart_divisor)
}

/// Display rules for `code` (percent for unknown codes).
pub fn display_format(code: &str) -> DisplayFormat {
    lookup(code).map_or(PERCENT_FORMAT, |spec| spec.format)
}

/// Finds the correlation label for a backend prefix, if the dashboard shows one.
pub fn correlation_label_for_prefix(prefix: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|spec| spec.backend_prefix == prefix)
        .and_then(|spec| spec.correlation_label)
}
