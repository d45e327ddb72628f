//! Render context - the substitution values for one family crate

use serde::Serialize;

use crate::core::{DependencyPin, GeneratorConfig};
use crate::generation::rules::{crate_name, device_list, features_block, modules_block};
use crate::generation::{FamilyGroup, GenerationError};

/// Values substituted into the family templates.
///
/// Built once per family from a finalized [`FamilyGroup`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    /// Family key, upper-cased
    pub family: String,
    pub crate_name: String,
    pub version: String,
    /// First device of the family, used in the readme usage example
    pub device: String,
    pub features: String,
    pub modules: String,
    /// Readme bullet list
    pub devices: String,
    pub authors: Vec<String>,
    pub repository: String,
    pub license: String,
    pub keywords: Vec<String>,
    pub categories: Vec<String>,
    pub dependencies: Vec<DependencyPin>,
    pub rt_feature: String,
}

impl RenderContext {
    pub fn for_family(
        group: &FamilyGroup,
        config: &GeneratorConfig,
    ) -> Result<Self, GenerationError> {
        let mut devices = group.devices.clone();
        devices.sort();
        let first = devices
            .first()
            .cloned()
            .ok_or_else(|| GenerationError::EmptyFamily(group.family.clone()))?;

        Ok(Self {
            family: group.family.to_uppercase(),
            crate_name: crate_name(&group.family),
            version: config.version.clone(),
            device: first,
            features: features_block(&devices),
            modules: modules_block(&devices),
            devices: device_list(&devices),
            authors: config.authors.clone(),
            repository: config.repository.clone(),
            license: config.license.clone(),
            keywords: config.keywords.clone(),
            categories: config.categories.clone(),
            dependencies: config.dependencies.clone(),
            rt_feature: config.rt_feature.clone(),
        })
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, GenerationError> {
        tera::Context::from_serialize(self).map_err(|e| {
            GenerationError::RenderError(format!("Failed to build template context: {e}"))
        })
    }
}
