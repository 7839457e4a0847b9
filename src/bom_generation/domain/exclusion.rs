use crate::bom_generation::domain::{Coordinate, DependencyRef};
use crate::shared::Result;

/// The literal whole-field wildcard accepted in exclusion patterns.
const WILDCARD: &str = "*";

/// A configured rule removing matching coordinates from aggregation.
///
/// Either field may be the literal `*` (whitespace around it is trimmed
/// before comparison), which matches any value in that field. An absent
/// field is NOT a wildcard: it never matches a non-empty coordinate field.
/// No substring or regex matching is supported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionPattern {
    group_id: Option<String>,
    artifact_id: Option<String>,
}

impl ExclusionPattern {
    pub fn new(group_id: Option<String>, artifact_id: Option<String>) -> Self {
        Self {
            group_id,
            artifact_id,
        }
    }

    /// Parses the `groupId:artifactId` form used on the command line,
    /// e.g. `com.example:*` or `*:commons-logging`.
    ///
    /// # Errors
    /// Returns an error if the pattern does not contain exactly one `:`.
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut parts = pattern.splitn(2, ':');
        match (parts.next(), parts.next()) {
            (Some(group), Some(artifact)) => Ok(Self::new(
                Some(group.to_string()),
                Some(artifact.to_string()),
            )),
            _ => anyhow::bail!(
                "Invalid exclusion pattern '{}'. Expected 'groupId:artifactId', e.g. 'com.example:*'",
                pattern
            ),
        }
    }

    /// Whether this pattern excludes the given coordinate.
    ///
    /// Both fields must match. Pure function, never panics on absent values.
    pub fn matches(&self, coordinate: &Coordinate) -> bool {
        field_matches(self.group_id.as_deref(), coordinate.group_id())
            && field_matches(self.artifact_id.as_deref(), coordinate.artifact_id())
    }
}

fn field_matches(pattern: Option<&str>, value: &str) -> bool {
    let pattern = pattern.unwrap_or("").trim();
    pattern == WILDCARD || pattern == value.trim()
}

/// A rule attaching a child-exclusion onto a surviving coordinate's own
/// transitive exclusion list, without removing the coordinate itself.
///
/// Matching is exact on `(dependency_group_id, dependency_artifact_id)`;
/// wildcards are not supported for this rule type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomExclusionRule {
    pub dependency_group_id: String,
    pub dependency_artifact_id: String,
    pub exclusion_group_id: String,
    pub exclusion_artifact_id: String,
}

impl BomExclusionRule {
    pub fn new(
        dependency_group_id: impl Into<String>,
        dependency_artifact_id: impl Into<String>,
        exclusion_group_id: impl Into<String>,
        exclusion_artifact_id: impl Into<String>,
    ) -> Self {
        Self {
            dependency_group_id: dependency_group_id.into(),
            dependency_artifact_id: dependency_artifact_id.into(),
            exclusion_group_id: exclusion_group_id.into(),
            exclusion_artifact_id: exclusion_artifact_id.into(),
        }
    }

    /// Whether this rule contributes an exclusion to the given coordinate.
    pub fn applies_to(&self, coordinate: &Coordinate) -> bool {
        self.dependency_group_id == coordinate.group_id()
            && self.dependency_artifact_id == coordinate.artifact_id()
    }

    /// The `(groupId, artifactId)` pair appended to a matching
    /// coordinate's exclusion list.
    pub fn exclusion_ref(&self) -> DependencyRef {
        DependencyRef::new(
            self.exclusion_group_id.clone(),
            self.exclusion_artifact_id.clone(),
        )
    }
}
