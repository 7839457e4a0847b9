use crate::bom_generation::domain::DependencySets;
use crate::shared::Result;
use std::path::Path;

/// DependencySourceReader port for obtaining a project's dependency
/// sets.
///
/// This port abstracts where the resolved, declared and
/// dependency-management sequences come from (a descriptor file on disk,
/// a build-system integration, a test fixture).
pub trait DependencySourceReader {
    /// Reads the three dependency sequences for the project at `path`.
    ///
    /// # Errors
    /// Returns an error if the underlying source is missing or cannot
    /// be parsed.
    fn read_dependency_sets(&self, project_path: &Path) -> Result<DependencySets>;
}
