//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur while rendering family crates
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid template {name}: {reason}")]
    InvalidTemplate { name: String, reason: String },

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Family {0} has no devices")]
    EmptyFamily(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
