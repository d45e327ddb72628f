//! Tera-based family renderer implementation

use std::path::Path;
use tera::Tera;
use tracing::debug;

use crate::generation::{FamilyArtifacts, FamilyRenderer, GenerationError, RenderContext};
use crate::infrastructure::templates::{TemplateKind, embedded_source, load_source};

/// Renders family crates from Tera templates.
///
/// All templates are parsed when the renderer is built; rendering afterwards only reads
/// the parsed templates.
pub struct TeraFamilyRenderer {
    tera: Tera,
}

impl TeraFamilyRenderer {
    /// Renderer using the templates embedded in the binary
    pub fn embedded() -> Result<Self, GenerationError> {
        let mut sources = Vec::with_capacity(TemplateKind::ALL.len());
        for kind in TemplateKind::ALL {
            sources.push((kind, embedded_source(kind)?));
        }
        Self::from_sources(sources)
    }

    /// Renderer preferring templates found in `template_dir`
    pub async fn with_overrides(template_dir: &Path) -> Result<Self, GenerationError> {
        let mut sources = Vec::with_capacity(TemplateKind::ALL.len());
        for kind in TemplateKind::ALL {
            sources.push((kind, load_source(kind, Some(template_dir)).await?));
        }
        Self::from_sources(sources)
    }

    fn from_sources(sources: Vec<(TemplateKind, String)>) -> Result<Self, GenerationError> {
        let mut tera = Tera::default();
        for (kind, content) in sources {
            tera.add_raw_template(kind.file_name(), &content)
                .map_err(|e| GenerationError::InvalidTemplate {
                    name: kind.file_name().to_string(),
                    reason: e.to_string(),
                })?;
        }
        Ok(Self { tera })
    }

    fn render_one(
        &self,
        kind: TemplateKind,
        context: &tera::Context,
    ) -> Result<String, GenerationError> {
        self.tera.render(kind.file_name(), context).map_err(|e| {
            GenerationError::RenderError(format!(
                "Failed to render template {}: {}",
                kind.file_name(),
                e
            ))
        })
    }
}

impl FamilyRenderer for TeraFamilyRenderer {
    fn render(&self, context: &RenderContext) -> Result<FamilyArtifacts, GenerationError> {
        debug!("Rendering family {}", context.family);
        let tera_context = context.to_tera_context()?;

        Ok(FamilyArtifacts {
            manifest: self.render_one(TemplateKind::Manifest, &tera_context)?,
            readme: self.render_one(TemplateKind::Readme, &tera_context)?,
            source_module: self.render_one(TemplateKind::SourceModule, &tera_context)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeneratorConfig;
    use crate::generation::FamilyGroup;
    use tempfile::TempDir;

    fn render(devices: &[&str]) -> FamilyArtifacts {
        let group = FamilyGroup::new(
            "stm32f4",
            devices.iter().map(|s| s.to_string()).collect(),
        );
        let context = RenderContext::for_family(&group, &GeneratorConfig::default()).unwrap();
        TeraFamilyRenderer::embedded().unwrap().render(&context).unwrap()
    }

    #[test]
    fn test_manifest_lists_one_feature_per_device() {
        let artifacts = render(&["stm32f411", "stm32f401"]);
        let manifest = &artifacts.manifest;

        assert!(manifest.contains("name = \"stm32f4\""));
        assert!(manifest.contains("version = \"0.1.1\""));
        assert!(manifest.contains("description = \"Device support crates for STM32F4 devices\""));
        assert!(manifest.contains("authors = [\"Adam Greig <adam@adamgreig.com>\"]"));
        assert!(manifest.contains("keywords = [\"stm32\", \"svd2rust\", \"no_std\", \"embedded\"]"));
        assert!(manifest.contains("[dependencies]\nbare-metal = \"0.1.1\"\nvcell = \"0.1.0\"\n"));
        assert!(manifest.contains("cortex-m-rt = \"0.4.0\"\n"));
        assert!(manifest.contains("[features]\ndefault = []\nrt = []\nstm32f401 = []\nstm32f411 = []"));

        let first = manifest.find("stm32f401 = []").unwrap();
        let second = manifest.find("stm32f411 = []").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_manifest_is_valid_toml_with_exact_feature_set() {
        let artifacts = render(&["stm32f405", "stm32f401", "stm32f4x9"]);
        let manifest: toml::Table = toml::from_str(&artifacts.manifest).unwrap();

        let features = manifest["features"].as_table().unwrap();
        let mut names: Vec<&str> = features
            .keys()
            .map(String::as_str)
            .filter(|k| *k != "default" && *k != "rt")
            .collect();
        names.sort();
        assert_eq!(names, ["stm32f401", "stm32f405", "stm32f4x9"]);

        let dependencies = manifest["dependencies"].as_table().unwrap();
        assert_eq!(dependencies["cortex-m"].as_str(), Some("0.4.3"));
    }

    #[test]
    fn test_source_module_gates_each_device() {
        let artifacts = render(&["stm32f411", "stm32f401"]);
        let source = &artifacts.source_module;

        assert!(source.starts_with("//! Peripheral access API for STM32F4 microcontrollers"));
        assert!(source.contains("#[cfg(feature = \"stm32f401\")]\npub mod stm32f401;\n"));
        assert!(source.contains("#[cfg(feature = \"stm32f411\")]\npub mod stm32f411;\n"));
        assert!(source.contains("#[cfg(feature = \"rt\")]\npub use cortex_m_rt::{default_handler, exception};"));
        assert!(source.find("pub mod stm32f401").unwrap() < source.find("pub mod stm32f411").unwrap());
    }

    #[test]
    fn test_readme_lists_devices_and_usage() {
        let artifacts = render(&["stm32f411", "stm32f4xx", "stm32f401"]);
        let readme = &artifacts.readme;

        assert!(readme.starts_with("# stm32f4\n"));
        assert!(readme.contains("access to STM32F4 peripherals"));
        assert!(readme.contains("[dependencies.stm32f4]\nversion = \"0.1.1\"\nfeatures = [\"stm32f401\", \"rt\"]"));
        assert!(readme.contains("* STM32F401\n* STM32F411\n* STM32F4xx"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(render(&["stm32f401", "stm32f411"]), render(&["stm32f401", "stm32f411"]));
        assert_eq!(render(&["stm32f411", "stm32f401"]), render(&["stm32f401", "stm32f411"]));
    }

    #[tokio::test]
    async fn test_overrides_replace_embedded_template() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(
            temp_dir.path().join("lib.rs.tera"),
            "// {{ family }}\n{{ modules }}",
        )
        .unwrap();

        let renderer = TeraFamilyRenderer::with_overrides(temp_dir.path())
            .await
            .unwrap();
        let group = FamilyGroup::new("stm32f0", vec!["stm32f030".to_string()]);
        let context = RenderContext::for_family(&group, &GeneratorConfig::default()).unwrap();
        let artifacts = renderer.render(&context).unwrap();

        assert_eq!(
            artifacts.source_module,
            "// STM32F0\n#[cfg(feature = \"stm32f030\")]\npub mod stm32f030;\n"
        );
        assert!(artifacts.manifest.contains("name = \"stm32f0\""));
    }

    #[tokio::test]
    async fn test_invalid_override_is_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(temp_dir.path().join("README.md.tera"), "{% if %}").unwrap();

        let result = TeraFamilyRenderer::with_overrides(temp_dir.path()).await;
        assert!(matches!(
            result,
            Err(GenerationError::InvalidTemplate { ref name, .. }) if name == "README.md.tera"
        ));
    }
}
