//! Infrastructure layer - concrete implementations of domain and application ports

pub mod discovery;
pub mod generation;
pub mod output;
pub mod prompt;
pub mod templates;

pub use discovery::*;
pub use generation::*;
pub use output::*;
pub use prompt::*;
