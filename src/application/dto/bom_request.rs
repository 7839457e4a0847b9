use crate::bom_generation::domain::BomConfig;
use std::path::PathBuf;

/// BomRequest - Internal request DTO for the BOM build use case.
///
/// Carries the project location and the fully-merged build configuration
/// (CLI flags already combined with any config file).
#[derive(Debug, Clone)]
pub struct BomRequest {
    /// Path to the project directory containing the dependency descriptor
    pub project_path: PathBuf,
    /// Merged build configuration
    pub config: BomConfig,
}

impl BomRequest {
    pub fn new(project_path: PathBuf, config: BomConfig) -> Self {
        Self {
            project_path,
            config,
        }
    }
}
