//! Port interfaces for the generation domain

use crate::generation::{FamilyArtifacts, GenerationError, RenderContext};

/// Derives the family key from a definition filename
pub trait FamilyScheme: Send + Sync {
    /// Family key for `file_name`, case preserved
    fn family_key<'a>(&self, file_name: &'a str) -> &'a str;
}

/// Turns a render context into the text of one family crate.
///
/// Implementations must not touch the filesystem or any other shared state while
/// rendering: the same context always yields the same artifacts.
pub trait FamilyRenderer: Send + Sync {
    fn render(&self, context: &RenderContext) -> Result<FamilyArtifacts, GenerationError>;
}
