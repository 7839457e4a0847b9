use crate::bom_generation::domain::{
    BomExclusionRule, Coordinate, ExclusionPattern, OrderedProperties,
};

/// The BOM's own identity, passed through from configuration verbatim.
///
/// `name` and `description` default to empty and are omitted by
/// formatters when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BomIdentity {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub name: String,
    pub description: String,
}

impl BomIdentity {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            name: String::new(),
            description: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Which of the three input sequences participate in aggregation.
///
/// Each source is independently toggleable; all off is a valid
/// configuration producing an empty BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSelection {
    /// The transitive closure as seen by the build.
    pub use_all_resolved: bool,
    /// Direct, first-order dependencies.
    pub use_declared: bool,
    /// Declared dependency-management entries.
    pub use_declared_management: bool,
}

impl Default for SourceSelection {
    fn default() -> Self {
        Self {
            use_all_resolved: true,
            use_declared: false,
            use_declared_management: false,
        }
    }
}

/// Full configuration for one BOM build.
#[derive(Debug, Clone, Default)]
pub struct BomConfig {
    pub identity: BomIdentity,
    pub sources: SourceSelection,
    pub exclusion_patterns: Vec<ExclusionPattern>,
    pub bom_exclusions: Vec<BomExclusionRule>,
    pub generate_version_properties: bool,
    pub rewrite_versions_as_properties: bool,
}

/// The assembled output of one BOM build.
///
/// `managed_dependencies` is sorted (group, artifact) ascending and has
/// already had exclusion filtering applied; `properties` preserves
/// insertion order for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct BomResult {
    pub identity: BomIdentity,
    pub properties: OrderedProperties,
    pub managed_dependencies: Vec<Coordinate>,
}
