//! View builders: the country comparison chart and the indicator comparison chart.
//!
//! Both are recomputed from scratch from the current selection and the
//! fetched records; nothing here holds state between runs.

use atlas_model::{AlignedTable, CorrelationResult, IndicatorDetails, RawCountryRecord, SeriesSet};
use serde::Serialize;
use tracing::debug;

use crate::align::build_aligned_table;
use crate::correlation::pearson;
use crate::error::{Result, TransformError};
use crate::extract::{extract_series, extract_series_set};
use crate::indicator_merge::build_indicator_table;
use crate::normalize::{convert_for_chart, normalize_indicator_columns, normalize_table};

/// Maximum number of countries compared against the primary one.
pub const MAX_COMPARE: usize = 7;

/// Maximum number of indicators in the indicator comparison view.
pub const MAX_INDICATORS: usize = 2;

/// The primary country plus the countries it is compared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSet {
    primary: String,
    others: Vec<String>,
    limit: usize,
}

impl ComparisonSet {
    pub fn new(primary: impl Into<String>) -> Self {
        Self::with_limit(primary, MAX_COMPARE)
    }

    pub fn with_limit(primary: impl Into<String>, limit: usize) -> Self {
        Self {
            primary: primary.into(),
            others: Vec::new(),
            limit,
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn others(&self) -> &[String] {
        &self.others
    }

    /// Adds a comparison country; the primary, duplicates, and countries
    /// beyond the limit are rejected.
    pub fn add(&mut self, entity: impl Into<String>) -> Result<()> {
        let entity = entity.into();
        if entity == self.primary || self.others.contains(&entity) {
            return Err(TransformError::DuplicateEntity(entity));
        }
        if self.others.len() >= self.limit {
            return Err(TransformError::ComparisonLimit { max: self.limit });
        }
        self.others.push(entity);
        Ok(())
    }

    /// Removes a comparison country, returning whether it was present.
    pub fn remove(&mut self, entity: &str) -> bool {
        let before = self.others.len();
        self.others.retain(|other| other != entity);
        self.others.len() != before
    }

    pub fn clear(&mut self) {
        self.others.clear();
    }
}

/// Builds the chart-ready country comparison table for one indicator.
///
/// `lookup` returns the fetched record of a country, or `None` when it is
/// not (yet) available; such countries still get a column of `None`s.
pub fn build_country_view<'a, F>(
    comparison: &ComparisonSet,
    indicator_key: &str,
    mut lookup: F,
) -> AlignedTable
where
    F: FnMut(&str) -> Option<&'a RawCountryRecord>,
{
    let primary = extract_series(lookup(comparison.primary()), indicator_key);
    let others: Vec<SeriesSet> = comparison
        .others()
        .iter()
        .map(|entity| extract_series_set(entity, lookup(entity), indicator_key))
        .collect();
    let aligned = build_aligned_table(comparison.primary(), &primary, &others);
    normalize_table(&aligned, indicator_key)
}

/// Indicators chosen for the indicator comparison view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndicatorSelection {
    None,
    Single(String),
    Pair(String, String),
}

impl IndicatorSelection {
    pub fn from_keys<S: AsRef<str>>(keys: &[S]) -> Result<Self> {
        match keys {
            [] => Ok(Self::None),
            [single] => Ok(Self::Single(single.as_ref().to_string())),
            [first, second] if first.as_ref() == second.as_ref() => Err(
                TransformError::DuplicateIndicator(first.as_ref().to_string()),
            ),
            [first, second] => Ok(Self::Pair(
                first.as_ref().to_string(),
                second.as_ref().to_string(),
            )),
            _ => Err(TransformError::TooManyIndicators {
                requested: keys.len(),
                max: MAX_INDICATORS,
            }),
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::None => Vec::new(),
            Self::Single(key) => vec![key.as_str()],
            Self::Pair(first, second) => vec![first.as_str(), second.as_str()],
        }
    }

    /// Whether this selection needs the per-indicator payload.
    pub fn needs_details(&self) -> bool {
        matches!(self, Self::Pair(..))
    }
}

/// Result of the indicator comparison view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorView {
    pub rows: AlignedTable,
    /// Present only for a pair selection.
    pub correlation: Option<CorrelationResult>,
}

impl IndicatorView {
    fn empty() -> Self {
        Self {
            rows: AlignedTable::default(),
            correlation: None,
        }
    }
}

/// Builds the indicator comparison view.
///
/// A single indicator is read straight from the country record (rows only
/// for observed years). A pair is merged from the per-indicator payload
/// (other indicators in the payload are ignored), ordered as selected,
/// converted per column, and correlated on the converted rows.
pub fn build_indicator_view(
    selection: &IndicatorSelection,
    record: Option<&RawCountryRecord>,
    details: Option<&IndicatorDetails>,
) -> IndicatorView {
    match selection {
        IndicatorSelection::None => IndicatorView::empty(),
        IndicatorSelection::Single(key) => {
            let Some(record) = record else {
                return IndicatorView::empty();
            };
            let mut rows = AlignedTable::new([key.as_str()]);
            for point in extract_series(Some(record), key) {
                rows.push_row(point.year, vec![convert_for_chart(key, point.value)]);
            }
            IndicatorView {
                rows,
                correlation: None,
            }
        }
        IndicatorSelection::Pair(first, second) => {
            let Some(details) = details else {
                debug!(first = %first, second = %second, "indicator payload missing");
                return IndicatorView::empty();
            };
            let selected: IndicatorDetails = details
                .iter()
                .filter(|(key, _)| *key == first || *key == second)
                .map(|(key, observations)| (key.clone(), observations.clone()))
                .collect();
            let merged = build_indicator_table(&selected);
            let projected = merged.project(&[first.as_str(), second.as_str()]);
            let rows = normalize_indicator_columns(&projected);
            let correlation = pearson(&rows, first, second);
            IndicatorView {
                rows,
                correlation: Some(correlation),
            }
        }
    }
}
