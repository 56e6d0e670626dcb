//! Client-side data pipeline of the indicator atlas.
//!
//! Turns raw backend records into chart-ready tables:
//!
//! 1. [`extract`] pulls `{prefix}_{YYYY}` fields into sorted year series
//! 2. [`align`] joins several countries onto one dense year axis
//! 3. [`normalize`] scales values into chart units and formats them
//! 4. [`correlation`] computes Pearson's r between two aligned columns
//! 5. [`indicator_merge`] joins per-indicator observations for one country
//!
//! [`views`] composes these into the two comparison charts and [`insights`]
//! holds the map snapshot and the smaller dashboard summaries. Nothing here
//! performs I/O.

pub mod align;
pub mod correlation;
pub mod error;
pub mod extract;
pub mod indicator_merge;
pub mod insights;
pub mod normalize;
pub mod numeric;
pub mod views;

pub use align::build_aligned_table;
pub use correlation::pearson;
pub use error::{Result, TransformError};
pub use extract::{extract_series, extract_series_set};
pub use indicator_merge::build_indicator_table;
pub use insights::{
    CorrelationSummary, MIN_DATA_POINTS, MapSnapshot, ScatterPoint, available_indicators,
    chart_title, legend_bucket, summarize_backend_correlations,
};
pub use normalize::{convert_for_chart, format_value, normalize_indicator_columns, normalize_table};
pub use views::{
    ComparisonSet, IndicatorSelection, IndicatorView, MAX_COMPARE, MAX_INDICATORS,
    build_country_view, build_indicator_view,
};
