//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

use crate::application::ApplicationError;
use crate::generation::Artifact;

/// Lists the device definition files of an input directory
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Filenames (not paths) of the definition files directly inside `dir`
    async fn list_definitions(&self, dir: &Path) -> Result<Vec<String>, ApplicationError>;
}

/// Asks the operator before anything is written.
///
/// `targets` are the directories that will be created or overwritten. Returning
/// `Ok(false)` aborts the run.
#[async_trait]
pub trait Confirmation: Send + Sync {
    async fn confirm(&self, targets: &[String]) -> Result<bool, ApplicationError>;
}

/// Service for writing generated artifacts to the output destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write all artifacts, replacing existing files
    async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), ApplicationError>;

    /// Ensure a directory exists
    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError>;
}
