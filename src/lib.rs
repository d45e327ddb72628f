//! pacgen - scaffolding for families of peripheral access crates
//!
//! Scans a directory of device definition files, groups devices into families by a
//! filename prefix, and writes a `Cargo.toml`, `README.md` and `src/lib.rs` for every
//! family with one feature flag and one gated module per device.
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;
