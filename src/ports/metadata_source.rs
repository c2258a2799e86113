use std::path::Path;

use crate::domain::{AppError, ProjectMetadata};

/// Capability for reading packaging metadata from a project's build descriptor.
pub trait MetadataSource {
    /// Extract metadata for the project rooted at `root`.
    fn project_metadata(&self, root: &Path) -> Result<ProjectMetadata, AppError>;
}
