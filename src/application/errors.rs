//! Application layer error types

use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Discovery error: {0}")]
    DiscoveryError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Cancelled by operator, no files were written")]
    Cancelled,

    #[error("Generation error: {0}")]
    GenerationError(#[from] crate::generation::GenerationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

