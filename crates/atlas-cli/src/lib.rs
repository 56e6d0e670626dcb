//! Library side of the `atlas` command: configuration, logging, orchestration
//! and rendering.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
