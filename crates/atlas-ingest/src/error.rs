//! Error types for fetching atlas data.

use thiserror::Error;

/// Errors that can occur while fetching from a data source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// Request could not be sent or the response body could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// Upstream answered with a non-success status.
    #[error("upstream returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Json(String),

    /// I/O error while reading an offline data file.
    #[error("I/O error: {0}")]
    Io(String),

    /// Offline data directory has no file for the request.
    #[error("no data file at {0}")]
    NotFound(String),

    /// Upstream reported an error in the payload itself.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Invalid base URL or query parameters.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl IngestError {
    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Io(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Json(_) | Self::NotFound(_) | Self::Upstream(_) | Self::InvalidUrl(_) => false,
        }
    }
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Json(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
