//! pacgen core
//!
//! Generator configuration and the error type used while loading it.

pub mod config;
pub mod error;

pub use config::{DependencyPin, GeneratorConfig, OutputLayout};
pub use error::{Error, Result};
