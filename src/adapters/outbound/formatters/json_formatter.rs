use crate::bom_generation::domain::BomResult;
use crate::ports::outbound::BomFormatter;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

/// JSON document schema for the assembled BOM.
///
/// Properties are serialized as an ordered array of name/value pairs so
/// the insertion order survives the round trip; a JSON object would not
/// guarantee it for every consumer.
#[derive(Debug, Serialize)]
struct BomDocument {
    #[serde(rename = "groupId")]
    group_id: String,
    #[serde(rename = "artifactId")]
    artifact_id: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    properties: Vec<PropertyEntry>,
    #[serde(rename = "dependencyManagement")]
    dependency_management: Vec<ManagedDependency>,
}

#[derive(Debug, Serialize)]
struct PropertyEntry {
    name: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct ManagedDependency {
    #[serde(rename = "groupId")]
    group_id: String,
    #[serde(rename = "artifactId")]
    artifact_id: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    classifier: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    packaging: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    exclusions: Vec<ExclusionEntry>,
}

#[derive(Debug, Serialize)]
struct ExclusionEntry {
    #[serde(rename = "groupId")]
    group_id: String,
    #[serde(rename = "artifactId")]
    artifact_id: String,
}

/// JsonFormatter adapter rendering the assembled BOM as pretty-printed
/// JSON.
///
/// This adapter implements the BomFormatter port for the `json` output
/// format.
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl BomFormatter for JsonFormatter {
    fn format(&self, bom: &BomResult) -> Result<String> {
        let document = BomDocument {
            group_id: bom.identity.group_id.clone(),
            artifact_id: bom.identity.artifact_id.clone(),
            version: bom.identity.version.clone(),
            name: non_empty(&bom.identity.name),
            description: non_empty(&bom.identity.description),
            properties: bom
                .properties
                .iter()
                .map(|(name, value)| PropertyEntry {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            dependency_management: bom
                .managed_dependencies
                .iter()
                .map(|dependency| ManagedDependency {
                    group_id: dependency.group_id().to_string(),
                    artifact_id: dependency.artifact_id().to_string(),
                    version: dependency.version().to_string(),
                    classifier: dependency.classifier().map(String::from),
                    packaging: dependency.packaging().map(String::from),
                    exclusions: dependency
                        .exclusions()
                        .iter()
                        .map(|exclusion| ExclusionEntry {
                            group_id: exclusion.group_id.clone(),
                            artifact_id: exclusion.artifact_id.clone(),
                        })
                        .collect(),
                })
                .collect(),
        };

        let mut output =
            serde_json::to_string_pretty(&document).context("Failed to serialize BOM as JSON")?;
        output.push('\n');
        Ok(output)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom_generation::domain::{
        BomIdentity, Coordinate, DependencyRef, OrderedProperties,
    };

    fn bom() -> BomResult {
        let mut properties = OrderedProperties::new();
        properties.put("project.build.sourceEncoding", "UTF-8");
        properties.put("version.g", "1.0");

        BomResult {
            identity: BomIdentity::new("org.example", "example-bom", "1.0.0"),
            properties,
            managed_dependencies: vec![Coordinate::new("g", "a", "${version.g}")
                .unwrap()
                .with_exclusion(DependencyRef::new("x", "y"))],
        }
    }

    #[test]
    fn test_format_json_structure() {
        let output = JsonFormatter::new().format(&bom()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["groupId"], "org.example");
        assert_eq!(value["artifactId"], "example-bom");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["properties"][0]["name"], "project.build.sourceEncoding");
        assert_eq!(value["properties"][1]["name"], "version.g");
        assert_eq!(value["dependencyManagement"][0]["version"], "${version.g}");
        assert_eq!(
            value["dependencyManagement"][0]["exclusions"][0]["groupId"],
            "x"
        );
    }

    #[test]
    fn test_empty_name_and_description_are_omitted() {
        let output = JsonFormatter::new().format(&bom()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(value.get("name").is_none());
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_absent_classifier_and_empty_exclusions_are_omitted() {
        let mut bom = bom();
        bom.managed_dependencies = vec![Coordinate::new("g", "a", "1.0").unwrap()];

        let output = JsonFormatter::new().format(&bom).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let dependency = &value["dependencyManagement"][0];
        assert!(dependency.get("classifier").is_none());
        assert!(dependency.get("type").is_none());
        assert!(dependency.get("exclusions").is_none());
    }
}
