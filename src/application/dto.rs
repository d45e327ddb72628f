//! Data Transfer Objects for application layer

use std::path::PathBuf;

/// Request to generate family crates from a definitions directory
#[derive(Debug, Clone)]
pub struct GenerateFamiliesRequest {
    pub definitions_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// Response from family generation
#[derive(Debug, Clone)]
pub struct GenerateFamiliesResponse {
    /// Crate names written, in processing order
    pub families: Vec<String>,
    pub devices_count: usize,
    pub artifacts_count: usize,
    pub output_path: PathBuf,
}
