//! Family templates embedded in the binary at compile time.
//!
//! The `templates/` directory is included with `rust-embed`, so `pacgen` works right
//! after `cargo install`. A template directory given with `--template-dir` may replace
//! any of the files by name; missing files fall back to the embedded copy.

use rust_embed::RustEmbed;
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::generation::GenerationError;

/// Container for all templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct EmbeddedTemplates;

/// The three files rendered for every family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Manifest,
    Readme,
    SourceModule,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Manifest,
        TemplateKind::Readme,
        TemplateKind::SourceModule,
    ];

    /// File name of the template, both embedded and in override directories
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::Manifest => "Cargo.toml.tera",
            TemplateKind::Readme => "README.md.tera",
            TemplateKind::SourceModule => "lib.rs.tera",
        }
    }
}

/// Source text of an embedded template
pub fn embedded_source(kind: TemplateKind) -> Result<String, GenerationError> {
    let file = EmbeddedTemplates::get(kind.file_name())
        .ok_or_else(|| GenerationError::TemplateNotFound(kind.file_name().to_string()))?;

    String::from_utf8(file.data.into_owned()).map_err(|e| GenerationError::InvalidTemplate {
        name: kind.file_name().to_string(),
        reason: e.to_string(),
    })
}

/// Source text of a template, preferring a copy in `template_dir`
pub async fn load_source(
    kind: TemplateKind,
    template_dir: Option<&Path>,
) -> Result<String, GenerationError> {
    if let Some(dir) = template_dir {
        let path = dir.join(kind.file_name());
        if fs::try_exists(&path).await? {
            debug!("Using template override {}", path.display());
            return Ok(fs::read_to_string(&path).await?);
        }
    }
    embedded_source(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_all_templates_are_embedded() {
        for kind in TemplateKind::ALL {
            let source = embedded_source(kind).unwrap();
            assert!(!source.is_empty(), "{} is empty", kind.file_name());
        }
    }

    #[tokio::test]
    async fn test_override_replaces_single_template() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(temp_dir.path().join("README.md.tera"), "# {{ crate_name }}\n").unwrap();

        let readme = load_source(TemplateKind::Readme, Some(temp_dir.path()))
            .await
            .unwrap();
        assert_eq!(readme, "# {{ crate_name }}\n");

        let manifest = load_source(TemplateKind::Manifest, Some(temp_dir.path()))
            .await
            .unwrap();
        assert_eq!(manifest, embedded_source(TemplateKind::Manifest).unwrap());
    }
}
