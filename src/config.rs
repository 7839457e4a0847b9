//! Configuration file support for bom-builder.
//!
//! Provides YAML-based configuration through `bom-builder.config.yml`
//! files, including data structures, file loading, and validation.
//! Command-line flags take precedence over config file values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "bom-builder.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<String>,
    pub bom: Option<BomSection>,
    pub sources: Option<SourcesSection>,
    pub exclude_dependencies: Option<Vec<ExcludeEntry>>,
    pub add_exclusions: Option<Vec<AddExclusionEntry>>,
    pub version_properties: Option<bool>,
    pub rewrite_versions: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// BOM identity fields, passed through verbatim.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BomSection {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Which dependency sources participate in aggregation.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SourcesSection {
    pub resolved: Option<bool>,
    pub declared: Option<bool>,
    pub dependency_management: Option<bool>,
}

/// One exclusion pattern; either field may be the literal `*` wildcard.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludeEntry {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
}

/// One BOM exclusion rule attaching a child-exclusion onto a matching
/// dependency.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExclusionEntry {
    pub dependency_group_id: String,
    pub dependency_artifact_id: String,
    pub exclusion_group_id: String,
    pub exclusion_artifact_id: String,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref entries) = config.add_exclusions {
        for (i, entry) in entries.iter().enumerate() {
            let fields = [
                ("dependencyGroupId", &entry.dependency_group_id),
                ("dependencyArtifactId", &entry.dependency_artifact_id),
                ("exclusionGroupId", &entry.exclusion_group_id),
                ("exclusionArtifactId", &entry.exclusion_artifact_id),
            ];
            for (name, value) in fields {
                if value.trim().is_empty() {
                    bail!(
                        "Invalid config: addExclusions[{}].{} must not be empty.\n\n\
                         💡 Hint: Each addExclusions entry must name the dependency and the exclusion with all four fields.",
                        i,
                        name
                    );
                }
            }
        }
    }

    if let Some(ref entries) = config.exclude_dependencies {
        for (i, entry) in entries.iter().enumerate() {
            if entry.group_id.is_none() && entry.artifact_id.is_none() {
                bail!(
                    "Invalid config: excludeDependencies[{}] has neither groupId nor artifactId.\n\n\
                     💡 Hint: An empty exclusion matches nothing; use \"*\" to wildcard a field.",
                    i
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
