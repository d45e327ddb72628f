//! Error handling for generator configuration.
//!
//! Configuration is the only part of pacgen read before the pipeline starts, so it carries
//! its own small error type instead of the application-level one.
//!
//! # Examples
//!
//! ```
//! use pacgen::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Ok(())
//! }
//! # might_fail().unwrap();
//! ```

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for configuration operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_config_creation() {
        let error = Error::config("prefix length must be positive");
        assert!(matches!(error, Error::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: prefix length must be positive"
        );
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("File not found"));
    }

    #[test]
    fn test_error_from_toml_error() {
        let toml_error = toml::from_str::<toml::Table>("version = ").unwrap_err();
        let error: Error = toml_error.into();
        assert!(matches!(error, Error::Toml(_)));
        assert!(error.to_string().contains("TOML parsing error"));
    }
}
