use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
