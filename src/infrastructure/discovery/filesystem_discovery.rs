//! Filesystem-based definition source

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

use crate::application::{ApplicationError, DefinitionSource};

/// Lists `*.{extension}` files directly inside a directory.
///
/// Dot-files and names that are not valid UTF-8 are skipped, as are directories whose
/// name happens to end in the extension. A plain `*.yaml` glob would return those
/// directories too; here only regular files (or symlinks to them) count. Names are
/// returned sorted so runs over the same directory see the same order.
pub struct FileSystemDefinitionSource {
    extension: String,
}

impl FileSystemDefinitionSource {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    fn matches(&self, file_name: &str) -> bool {
        !file_name.starts_with('.')
            && Path::new(file_name)
                .extension()
                .is_some_and(|ext| ext == self.extension.as_str())
    }
}

impl Default for FileSystemDefinitionSource {
    fn default() -> Self {
        Self::new("yaml")
    }
}

#[async_trait]
impl DefinitionSource for FileSystemDefinitionSource {
    async fn list_definitions(&self, dir: &Path) -> Result<Vec<String>, ApplicationError> {
        let mut entries = fs::read_dir(dir).await.map_err(|e| {
            ApplicationError::DiscoveryError(format!(
                "Failed to read directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            ApplicationError::DiscoveryError(format!(
                "Failed to list directory {}: {}",
                dir.display(),
                e
            ))
        })? {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                warn!("Skipping non UTF-8 file name {:?}", file_name);
                continue;
            };
            if !self.matches(name) {
                continue;
            }

            // Follows symlinks, so a link to a definition file counts as one
            match fs::metadata(entry.path()).await {
                Ok(metadata) if metadata.is_file() => names.push(name.to_string()),
                Ok(_) => debug!("Skipping {}: not a regular file", name),
                Err(e) => warn!("Skipping {}: {}", name, e),
            }
        }

        names.sort();
        Ok(names)
    }
}
