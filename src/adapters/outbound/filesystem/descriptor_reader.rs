use crate::bom_generation::domain::{DependencyRecord, DependencySets};
use crate::ports::outbound::DependencySourceReader;
use crate::shared::error::BomError;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// File name of the dependency descriptor expected in the project
/// directory.
pub const DESCRIPTOR_FILENAME: &str = "bom-deps.toml";

/// Raw TOML schema of the dependency descriptor.
///
/// Identity fields are optional on purpose: incomplete records are
/// passed through so the core rejects them with a precise error instead
/// of the parser producing a generic one.
#[derive(Debug, Deserialize, Default)]
struct RawDescriptor {
    #[serde(default)]
    resolved: Vec<RawDependency>,
    #[serde(default)]
    declared: Vec<RawDependency>,
    #[serde(default, rename = "dependency-management")]
    dependency_management: Vec<RawDependency>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDependency {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    classifier: Option<String>,
    #[serde(rename = "type")]
    packaging: Option<String>,
}

impl From<RawDependency> for DependencyRecord {
    fn from(raw: RawDependency) -> Self {
        DependencyRecord {
            group_id: raw.group_id,
            artifact_id: raw.artifact_id,
            version: raw.version,
            classifier: raw.classifier,
            packaging: raw.packaging,
        }
    }
}

/// FileSystemSourceReader adapter reading the project's dependency
/// descriptor (`bom-deps.toml`) from disk.
///
/// This adapter implements the DependencySourceReader port for the
/// filesystem.
#[derive(Debug, Default)]
pub struct FileSystemSourceReader;

impl FileSystemSourceReader {
    pub fn new() -> Self {
        Self
    }
}

impl DependencySourceReader for FileSystemSourceReader {
    fn read_dependency_sets(&self, project_path: &Path) -> Result<DependencySets> {
        let descriptor_path = project_path.join(DESCRIPTOR_FILENAME);

        if !descriptor_path.exists() {
            return Err(BomError::DescriptorNotFound {
                path: descriptor_path,
                suggestion: format!(
                    "Export the project's dependency sets to {} first",
                    DESCRIPTOR_FILENAME
                ),
            }
            .into());
        }

        let content =
            std::fs::read_to_string(&descriptor_path).map_err(|e| BomError::FileReadError {
                path: descriptor_path.clone(),
                details: e.to_string(),
            })?;

        parse_descriptor(&content, &descriptor_path)
    }
}

fn parse_descriptor(content: &str, path: &Path) -> Result<DependencySets> {
    let raw: RawDescriptor = toml::from_str(content).map_err(|e| BomError::DescriptorParseError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    Ok(DependencySets {
        resolved: raw.resolved.into_iter().map(Into::into).collect(),
        declared: raw.declared.into_iter().map(Into::into).collect(),
        declared_management: raw
            .dependency_management
            .into_iter()
            .map(Into::into)
            .collect(),
    })
}
