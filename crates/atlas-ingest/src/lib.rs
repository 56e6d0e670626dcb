//! Data sources for the indicator atlas.
//!
//! [`HttpSource`] talks to the backend API; [`FileSource`] reads the same
//! payloads from a local directory. Both implement [`DataSource`], and
//! [`or_no_data`] turns fetch failures into empty data the way the
//! dashboard expects.

pub mod error;
pub mod file;
pub mod http;
pub mod payload;
pub mod source;

pub use error::{IngestError, Result};
pub use file::{FileSource, slug};
pub use http::{DEFAULT_TIMEOUT, HttpSource};
pub use payload::{CountryPayload, IndicatorsPayload, LatestEntry, OneOrMany, parse_latest};
pub use source::{DataSource, or_no_data};
