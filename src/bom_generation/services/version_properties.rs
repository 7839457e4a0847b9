use crate::bom_generation::domain::{Coordinate, OrderedProperties};
use std::collections::BTreeMap;
use std::collections::HashMap;

/// The derived property-name mapping for one BOM build.
///
/// Holds both directions produced by [`VersionPropertyNamer::derive`]:
/// which property each `groupId:artifactId` resolves to, and the ordered
/// property-name-to-version map. Intermediate value, discarded after
/// assembly.
#[derive(Debug)]
pub struct VersionPropertyAssignment {
    property_names: HashMap<String, String>,
    properties: OrderedProperties,
}

impl VersionPropertyAssignment {
    /// The property name assigned to the given coordinate, if any.
    pub fn property_for(&self, coordinate: &Coordinate) -> Option<&str> {
        self.property_names
            .get(&coordinate.key())
            .map(String::as_str)
    }

    pub fn properties(&self) -> &OrderedProperties {
        &self.properties
    }

    pub fn into_properties(self) -> OrderedProperties {
        self.properties
    }
}

/// VersionPropertyNamer - derives a stable property-name-to-version
/// mapping from the final coordinate list.
///
/// The naming scheme minimizes the number of distinct properties while
/// guaranteeing that two differently-versioned artifacts in the same
/// group never collide on one property:
///
/// - a group whose artifacts all share one version (or which has a
///   single artifact) gets one shared `version.<groupId>` property;
/// - otherwise each artifact gets its own
///   `version.<groupId>.<artifactId>` property.
pub struct VersionPropertyNamer;

impl VersionPropertyNamer {
    /// Derives the property assignment for the given coordinate list.
    ///
    /// If the same `(groupId, artifactId)` appears twice with different
    /// versions, the later occurrence wins; this follows input order and
    /// is not treated as a conflict. Versions that are already `${...}`
    /// references are opaque strings. Derived properties are recorded in
    /// ascending group order, then ascending artifact order.
    pub fn derive(coordinates: &[Coordinate]) -> VersionPropertyAssignment {
        // group -> artifact -> version, last write wins per (group, artifact)
        let mut groups: BTreeMap<&str, BTreeMap<&str, &str>> = BTreeMap::new();
        for coordinate in coordinates {
            groups
                .entry(coordinate.group_id())
                .or_default()
                .insert(coordinate.artifact_id(), coordinate.version());
        }

        let mut property_names = HashMap::new();
        let mut properties = OrderedProperties::new();

        for (group_id, artifacts) in &groups {
            if let Some(shared_version) = Self::shared_version(artifacts) {
                let property_name = format!("version.{}", group_id);
                properties.put(property_name.clone(), shared_version);
                for artifact_id in artifacts.keys() {
                    property_names
                        .insert(format!("{}:{}", group_id, artifact_id), property_name.clone());
                }
            } else {
                for (artifact_id, version) in artifacts {
                    let property_name = format!("version.{}.{}", group_id, artifact_id);
                    properties.put(property_name.clone(), *version);
                    property_names
                        .insert(format!("{}:{}", group_id, artifact_id), property_name);
                }
            }
        }

        VersionPropertyAssignment {
            property_names,
            properties,
        }
    }

    /// The version shared by every artifact in the group, or `None` when
    /// versions diverge. A single-artifact group always has a shared
    /// version.
    fn shared_version<'a>(artifacts: &BTreeMap<&str, &'a str>) -> Option<&'a str> {
        let mut versions = artifacts.values();
        let first = versions.next().copied()?;
        versions.all(|version| *version == first).then_some(first)
    }
}
