use crate::shared::Result;

/// A `(groupId, artifactId)` pair referencing another coordinate.
///
/// Used for the transitive exclusions attached to a managed dependency
/// entry, not for identifying the dependency itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRef {
    pub group_id: String,
    pub artifact_id: String,
}

impl DependencyRef {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }
}

/// One managed dependency entry of the BOM.
///
/// Identity and ordering are defined by `(group_id, artifact_id)` using
/// ordinal, case-sensitive string comparison. The value is immutable once
/// constructed; rewriting the version to a property reference produces a
/// new `Coordinate` via [`Coordinate::with_version`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    group_id: String,
    artifact_id: String,
    version: String,
    classifier: Option<String>,
    packaging: Option<String>,
    exclusions: Vec<DependencyRef>,
}

impl Coordinate {
    /// Creates a coordinate, rejecting blank identity fields.
    ///
    /// # Errors
    /// Returns an error if `group_id` or `artifact_id` is empty or
    /// whitespace-only.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        let version = version.into();

        if group_id.trim().is_empty() {
            anyhow::bail!("missing groupId");
        }
        if artifact_id.trim().is_empty() {
            anyhow::bail!("missing artifactId");
        }
        if version.trim().is_empty() {
            anyhow::bail!("missing version");
        }

        Ok(Self {
            group_id,
            artifact_id,
            version,
            classifier: None,
            packaging: None,
            exclusions: Vec::new(),
        })
    }

    /// Sets the classifier, normalizing an empty string to absent.
    pub fn with_classifier(mut self, classifier: Option<String>) -> Self {
        self.classifier = normalize_optional(classifier);
        self
    }

    /// Sets the packaging type, normalizing an empty string to absent.
    /// The semantic default when absent is "jar".
    pub fn with_packaging(mut self, packaging: Option<String>) -> Self {
        self.packaging = normalize_optional(packaging);
        self
    }

    /// Returns a copy of this coordinate with a different version string.
    ///
    /// Used by the assembler to rewrite versions into `${property}`
    /// references without mutating the original entry.
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..self.clone()
        }
    }

    /// Appends a transitive exclusion to this coordinate's exclusion list.
    pub fn with_exclusion(mut self, exclusion: DependencyRef) -> Self {
        self.exclusions.push(exclusion);
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn packaging(&self) -> Option<&str> {
        self.packaging.as_deref()
    }

    pub fn exclusions(&self) -> &[DependencyRef] {
        &self.exclusions
    }

    /// The `groupId:artifactId` key used for version-property assignment.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// One native dependency record as provided by the surrounding adapter.
///
/// Identity fields are optional here so that the core, not the adapter,
/// decides how incomplete records are rejected.
#[derive(Debug, Clone, Default)]
pub struct DependencyRecord {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub classifier: Option<String>,
    pub packaging: Option<String>,
}

impl DependencyRecord {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: Some(version.into()),
            classifier: None,
            packaging: None,
        }
    }

    /// Adapts this native record into a [`Coordinate`].
    ///
    /// # Errors
    /// Returns an error if groupId, artifactId or version is missing or blank.
    pub fn into_coordinate(self) -> Result<Coordinate> {
        Ok(Coordinate::new(
            self.group_id.unwrap_or_default(),
            self.artifact_id.unwrap_or_default(),
            self.version.unwrap_or_default(),
        )?
        .with_classifier(self.classifier)
        .with_packaging(self.packaging))
    }
}

/// The three independently-toggleable input sequences feeding aggregation.
#[derive(Debug, Clone, Default)]
pub struct DependencySets {
    /// The transitive closure as seen by the build.
    pub resolved: Vec<DependencyRecord>,
    /// Direct, first-order dependencies.
    pub declared: Vec<DependencyRecord>,
    /// Declared dependency-management entries.
    pub declared_management: Vec<DependencyRecord>,
}
