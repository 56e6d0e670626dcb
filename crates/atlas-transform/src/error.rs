use thiserror::Error;

/// Errors raised by selection and comparison bookkeeping.
///
/// The data pipeline itself never fails: missing or malformed data
/// degrades to empty series, `None` slots, or neutral coefficients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("at most {max} indicators can be compared, got {requested}")]
    TooManyIndicators { requested: usize, max: usize },
    #[error("{0} is selected twice")]
    DuplicateIndicator(String),
    #[error("comparison limit of {max} countries reached")]
    ComparisonLimit { max: usize },
    #[error("{0} is already part of the comparison")]
    DuplicateEntity(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;
