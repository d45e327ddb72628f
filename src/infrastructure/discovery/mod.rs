//! Definition file discovery

pub mod filesystem_discovery;

pub use filesystem_discovery::*;
