//! Operator confirmation before files are written

pub mod console_confirmation;

pub use console_confirmation::*;
