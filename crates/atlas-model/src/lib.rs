//! Domain types for the indicator atlas.
//!
//! - **indicator**: the closed indicator catalog (prefixes, scales, formats, legends)
//! - **series**: raw backend records and extracted year series
//! - **table**: year-aligned tables shared by charts and correlation
//! - **correlation**: Pearson results and qualitative bands
//! - **country**: country name resolution

pub mod correlation;
pub mod country;
pub mod error;
pub mod indicator;
pub mod series;
pub mod table;

pub use correlation::{CorrelationBand, CorrelationResult};
pub use country::CountryDictionary;
pub use error::{ModelError, Result};
pub use indicator::{DisplayFormat, IndicatorKey, IndicatorSpec, LegendBand};
pub use series::{
    IndicatorDetails, IndicatorObservation, RawCountryRecord, SeriesSet, YearValuePoint,
};
pub use table::{AlignedRow, AlignedTable};
