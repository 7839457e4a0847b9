use bom_builder::prelude::*;
use std::path::Path;

/// Mock DependencySourceReader for testing
pub struct MockSourceReader {
    sets: DependencySets,
    should_fail: bool,
}

impl MockSourceReader {
    pub fn new(sets: DependencySets) -> Self {
        Self {
            sets,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            sets: DependencySets::default(),
            should_fail: true,
        }
    }
}

impl DependencySourceReader for MockSourceReader {
    fn read_dependency_sets(&self, _project_path: &Path) -> Result<DependencySets> {
        if self.should_fail {
            anyhow::bail!("Mock dependency source failure");
        }
        Ok(self.sets.clone())
    }
}
