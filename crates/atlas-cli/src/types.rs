use atlas_model::{AlignedTable, CorrelationResult, IndicatorKey};
use atlas_transform::{CorrelationSummary, ScatterPoint};
use serde::Serialize;

/// Country comparison chart for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesReport {
    pub indicator: String,
    pub title: String,
    pub primary: String,
    pub year_domain: (i32, i32),
    pub rows: AlignedTable,
}

/// Indicator comparison chart for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorReport {
    pub country: String,
    pub indicators: Vec<String>,
    pub year_domain: (i32, i32),
    pub rows: AlignedTable,
    pub correlation: Option<CorrelationResult>,
    /// Band label of the coefficient, when there is one.
    pub band: Option<String>,
}

/// One country on the world map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapEntry {
    #[serde(flatten)]
    pub point: ScatterPoint,
    pub legend_bucket: Option<usize>,
    pub legend_label: Option<&'static str>,
}

/// World map snapshot of one indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapReport {
    pub indicator: String,
    pub label: String,
    pub entries: Vec<MapEntry>,
}

/// Secondary summaries for a country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsReport {
    pub country: String,
    pub indicator: String,
    pub available: Vec<IndicatorKey>,
    pub correlations: Vec<CorrelationSummary>,
}
