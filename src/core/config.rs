//! Generator configuration.
//!
//! Every generated family crate shares the same package metadata. The defaults reproduce
//! the stm32 device crates; a TOML file passed with `--config` can override any field:
//!
//! ```toml
//! version = "0.2.0"
//! family_prefix_len = 7
//!
//! [[dependencies]]
//! name = "cortex-m"
//! version = "0.5.0"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::generation::PrefixFamilyScheme;

/// Version written into every generated manifest unless configured otherwise
pub const DEFAULT_VERSION: &str = "0.1.1";

/// A pinned dependency of the generated crates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyPin {
    pub name: String,
    pub version: String,
}

impl DependencyPin {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// File names of the artifacts written for each family
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputLayout {
    pub manifest: String,
    pub readme: String,
    pub source_dir: String,
    pub source_module: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            manifest: "Cargo.toml".to_string(),
            readme: "README.md".to_string(),
            source_dir: "src".to_string(),
            source_module: "lib.rs".to_string(),
        }
    }
}

/// Settings shared by every family rendered in one run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Version of the generated crates
    pub version: String,
    pub authors: Vec<String>,
    pub repository: String,
    pub license: String,
    pub keywords: Vec<String>,
    pub categories: Vec<String>,
    pub dependencies: Vec<DependencyPin>,
    /// Name of the reserved feature enabling runtime support
    pub rt_feature: String,
    /// Extension (without the dot) of device definition files
    pub definition_extension: String,
    /// Number of leading filename characters forming the family key
    pub family_prefix_len: usize,
    pub layout: OutputLayout,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            authors: vec!["Adam Greig <adam@adamgreig.com>".to_string()],
            repository: "https://github.com/adamgreig/stm32-rs".to_string(),
            license: "MIT/Apache-2.0".to_string(),
            keywords: ["stm32", "svd2rust", "no_std", "embedded"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            categories: vec!["embedded".to_string(), "no-std".to_string()],
            dependencies: vec![
                DependencyPin::new("bare-metal", "0.1.1"),
                DependencyPin::new("vcell", "0.1.0"),
                DependencyPin::new("cortex-m", "0.4.3"),
                DependencyPin::new("cortex-m-rt", "0.4.0"),
            ],
            rt_feature: "rt".to_string(),
            definition_extension: "yaml".to_string(),
            family_prefix_len: PrefixFamilyScheme::DEFAULT_LEN,
            layout: OutputLayout::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from TOML text, filling unset fields with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub async fn load(path: &Path) -> Result<Self> {
        debug!("Loading generator config from {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&content)
    }

    /// Check the settings the pipeline relies on
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(Error::config("version cannot be empty"));
        }
        if self.family_prefix_len == 0 {
            return Err(Error::config("family_prefix_len must be at least 1"));
        }
        if self.definition_extension.is_empty() || self.definition_extension.starts_with('.') {
            return Err(Error::config(
                "definition_extension must be a bare extension such as \"yaml\"",
            ));
        }
        if self.rt_feature.is_empty() {
            return Err(Error::config("rt_feature cannot be empty"));
        }
        Ok(())
    }
}
