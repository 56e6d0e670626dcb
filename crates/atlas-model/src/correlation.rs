//! Correlation results and their qualitative bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pearson coefficient between two aligned columns.
///
/// `coefficient` is `None` when the table had fewer than two rows. It is
/// never NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub coefficient: Option<f64>,
    pub sample_size: usize,
}

impl CorrelationResult {
    pub fn insufficient() -> Self {
        Self {
            coefficient: None,
            sample_size: 0,
        }
    }

    /// Band of the coefficient, or `None` when there is no coefficient.
    pub fn band(&self) -> Option<CorrelationBand> {
        self.coefficient.map(CorrelationBand::classify)
    }
}

/// Qualitative reading of a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationBand {
    StrongPositive,
    ModeratePositive,
    None,
    ModerateNegative,
    StrongNegative,
}

/// Evaluated top-down: the first threshold strictly below the value wins.
const BAND_LADDER: [(f64, CorrelationBand); 4] = [
    (0.7, CorrelationBand::StrongPositive),
    (0.3, CorrelationBand::ModeratePositive),
    (-0.3, CorrelationBand::None),
    (-0.7, CorrelationBand::ModerateNegative),
];

impl CorrelationBand {
    pub fn classify(value: f64) -> Self {
        BAND_LADDER
            .iter()
            .find(|(threshold, _)| value > *threshold)
            .map_or(CorrelationBand::StrongNegative, |(_, band)| *band)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CorrelationBand::StrongPositive => "Strong Positive Correlation",
            CorrelationBand::ModeratePositive => "Moderate Positive Correlation",
            CorrelationBand::None => "No Significant Correlation",
            CorrelationBand::ModerateNegative => "Moderate Negative Correlation",
            CorrelationBand::StrongNegative => "Strong Negative Correlation",
        }
    }
}

impl fmt::Display for CorrelationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_boundaries() {
        assert_eq!(CorrelationBand::classify(0.71), CorrelationBand::StrongPositive);
        assert_eq!(CorrelationBand::classify(0.7), CorrelationBand::ModeratePositive);
        assert_eq!(CorrelationBand::classify(0.3), CorrelationBand::None);
        assert_eq!(CorrelationBand::classify(-0.3), CorrelationBand::ModerateNegative);
        assert_eq!(CorrelationBand::classify(-0.7), CorrelationBand::StrongNegative);
        assert_eq!(CorrelationBand::classify(0.0), CorrelationBand::None);
    }

    #[test]
    fn no_band_without_coefficient() {
        assert_eq!(CorrelationResult::insufficient().band(), None);
        let result = CorrelationResult {
            coefficient: Some(-0.9),
            sample_size: 5,
        };
        assert_eq!(result.band(), Some(CorrelationBand::StrongNegative));
    }
}
