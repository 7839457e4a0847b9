use crate::bom_generation::domain::{BomConfig, BomResult, DependencySets, OrderedProperties};
use crate::bom_generation::services::{CoordinateSorter, SourceAggregator, VersionPropertyNamer};
use crate::shared::{BomError, Result};

/// The fixed property every generated BOM carries, inserted before any
/// derived version properties.
const SOURCE_ENCODING_PROPERTY: (&str, &str) = ("project.build.sourceEncoding", "UTF-8");

/// BomAssembler - top-level orchestration of aggregation, sorting and
/// version-property derivation into a final [`BomResult`].
///
/// Pure computation over the in-memory dependency sets; performs no I/O
/// and holds no state across invocations, so identical input and
/// configuration always produce an identical result.
pub struct BomAssembler;

impl BomAssembler {
    /// Assembles the BOM for the given input sets and configuration.
    ///
    /// # Errors
    /// - configuration error if version rewriting is requested without
    ///   version-property generation, raised before aggregation begins;
    /// - malformed-record errors surfaced from aggregation.
    pub fn assemble(sets: &DependencySets, config: &BomConfig) -> Result<BomResult> {
        if config.rewrite_versions_as_properties && !config.generate_version_properties {
            return Err(BomError::InvalidConfiguration {
                message: "rewriting versions as property references requires version-property \
                          generation to be enabled"
                    .to_string(),
                hint: "Enable 'versionProperties' alongside 'rewriteVersions'".to_string(),
            }
            .into());
        }

        let candidates = SourceAggregator::aggregate(
            sets,
            &config.sources,
            &config.exclusion_patterns,
            &config.bom_exclusions,
        )?;
        let mut managed_dependencies = CoordinateSorter::sort(candidates);

        let mut properties = OrderedProperties::new();
        properties.put(SOURCE_ENCODING_PROPERTY.0, SOURCE_ENCODING_PROPERTY.1);

        if config.generate_version_properties {
            let assignment = VersionPropertyNamer::derive(&managed_dependencies);

            if config.rewrite_versions_as_properties {
                managed_dependencies = managed_dependencies
                    .into_iter()
                    .map(|coordinate| match assignment.property_for(&coordinate) {
                        Some(property_name) => {
                            coordinate.with_version(format!("${{{}}}", property_name))
                        }
                        None => coordinate,
                    })
                    .collect();
            }

            properties.extend(assignment.into_properties());
        }

        Ok(BomResult {
            identity: config.identity.clone(),
            properties,
            managed_dependencies,
        })
    }
}
