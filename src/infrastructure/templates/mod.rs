//! Template sources for the family renderer

pub mod embedded;

pub use embedded::*;
