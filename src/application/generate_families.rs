//! Use case for generating family crates

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::application::{
    ApplicationError, Confirmation, DefinitionSource, GenerateFamiliesRequest,
    GenerateFamiliesResponse, OutputService,
};
use crate::core::{GeneratorConfig, OutputLayout};
use crate::generation::rules::crate_name;
use crate::generation::{
    Artifact, FamilyArtifacts, FamilyGroups, FamilyRenderer, FamilyScheme, RenderContext,
};

/// Discovers device definitions, confirms with the operator and writes one crate per family
pub struct GenerateFamiliesUseCase {
    definition_source: Arc<dyn DefinitionSource>,
    family_scheme: Arc<dyn FamilyScheme>,
    renderer: Arc<dyn FamilyRenderer>,
    confirmation: Arc<dyn Confirmation>,
    output_service: Arc<dyn OutputService>,
    config: Arc<GeneratorConfig>,
}

impl GenerateFamiliesUseCase {
    pub fn new(
        definition_source: Arc<dyn DefinitionSource>,
        family_scheme: Arc<dyn FamilyScheme>,
        renderer: Arc<dyn FamilyRenderer>,
        confirmation: Arc<dyn Confirmation>,
        output_service: Arc<dyn OutputService>,
        config: Arc<GeneratorConfig>,
    ) -> Self {
        Self {
            definition_source,
            family_scheme,
            renderer,
            confirmation,
            output_service,
            config,
        }
    }

    pub async fn execute(
        &self,
        request: GenerateFamiliesRequest,
    ) -> Result<GenerateFamiliesResponse, ApplicationError> {
        // 1. Discover definition files and group them into families
        let file_names = self
            .definition_source
            .list_definitions(&request.definitions_dir)
            .await?;
        debug!(
            "Found {} definition files in {}",
            file_names.len(),
            request.definitions_dir.display()
        );
        let groups = FamilyGroups::from_file_names(&file_names, self.family_scheme.as_ref());

        // 2. Nothing is written unless the operator agrees
        let targets: Vec<String> = groups
            .family_keys()
            .map(|family| format!("{}/", crate_name(family)))
            .collect();
        if !self.confirmation.confirm(&targets).await? {
            return Err(ApplicationError::Cancelled);
        }

        // 3. Render and write each family in turn
        let mut families = Vec::with_capacity(groups.len());
        let mut artifacts_count = 0;
        for group in groups.finalize() {
            let context = RenderContext::for_family(&group, &self.config)?;
            let rendered = self.renderer.render(&context)?;
            let crate_dir = request.output_dir.join(&context.crate_name);

            self.output_service
                .ensure_directory(&crate_dir.join(&self.config.layout.source_dir))
                .await?;

            let artifacts = family_artifacts(&crate_dir, &self.config.layout, rendered);
            self.output_service.write_artifacts(&artifacts).await?;

            info!(
                "Wrote {} ({} devices) to {}",
                context.crate_name,
                group.devices.len(),
                crate_dir.display()
            );
            artifacts_count += artifacts.len();
            families.push(context.crate_name);
        }

        Ok(GenerateFamiliesResponse {
            families,
            devices_count: file_names.len(),
            artifacts_count,
            output_path: request.output_dir,
        })
    }
}

/// Place the rendered texts at their paths inside `crate_dir`
fn family_artifacts(
    crate_dir: &Path,
    layout: &OutputLayout,
    rendered: FamilyArtifacts,
) -> Vec<Artifact> {
    vec![
        Artifact {
            path: crate_dir.join(&layout.manifest),
            content: rendered.manifest,
        },
        Artifact {
            path: crate_dir.join(&layout.readme),
            content: rendered.readme,
        },
        Artifact {
            path: crate_dir.join(&layout.source_dir).join(&layout.source_module),
            content: rendered.source_module,
        },
    ]
}
