use crate::bom_generation::domain::{
    BomExclusionRule, Coordinate, DependencyRecord, DependencySets, ExclusionPattern,
    SourceSelection,
};
use crate::shared::{BomError, Result};

/// SourceAggregator - merges the enabled input sequences into one
/// candidate list.
///
/// Sources are processed in fixed precedence order (resolved, declared,
/// declared-management) and concatenated, not set-unioned: a coordinate
/// reachable from two enabled sources appears twice in the candidate
/// list. Deduplication is intentionally not performed here.
pub struct SourceAggregator;

impl SourceAggregator {
    /// Builds the candidate coordinate list from the enabled sources.
    ///
    /// Per record: adapt to a [`Coordinate`], drop it if any exclusion
    /// pattern matches (first match wins), then append the exclusions
    /// contributed by exactly-matching BOM exclusion rules in
    /// configuration order.
    ///
    /// # Errors
    /// Returns a malformed-record error identifying the source and index
    /// of any record missing groupId, artifactId or version.
    pub fn aggregate(
        sets: &DependencySets,
        selection: &SourceSelection,
        patterns: &[ExclusionPattern],
        rules: &[BomExclusionRule],
    ) -> Result<Vec<Coordinate>> {
        let mut candidates = Vec::new();

        if selection.use_all_resolved {
            Self::aggregate_source("resolved", &sets.resolved, patterns, rules, &mut candidates)?;
        }
        if selection.use_declared {
            Self::aggregate_source("declared", &sets.declared, patterns, rules, &mut candidates)?;
        }
        if selection.use_declared_management {
            Self::aggregate_source(
                "dependency-management",
                &sets.declared_management,
                patterns,
                rules,
                &mut candidates,
            )?;
        }

        Ok(candidates)
    }

    fn aggregate_source(
        source: &str,
        records: &[DependencyRecord],
        patterns: &[ExclusionPattern],
        rules: &[BomExclusionRule],
        candidates: &mut Vec<Coordinate>,
    ) -> Result<()> {
        for (index, record) in records.iter().enumerate() {
            let coordinate = record.clone().into_coordinate().map_err(|e| {
                BomError::MalformedRecord {
                    source_name: source.to_string(),
                    index,
                    details: e.to_string(),
                }
            })?;

            if patterns.iter().any(|pattern| pattern.matches(&coordinate)) {
                continue;
            }

            candidates.push(Self::apply_exclusion_rules(coordinate, rules));
        }
        Ok(())
    }

    fn apply_exclusion_rules(coordinate: Coordinate, rules: &[BomExclusionRule]) -> Coordinate {
        let applicable: Vec<&BomExclusionRule> = rules
            .iter()
            .filter(|rule| rule.applies_to(&coordinate))
            .collect();
        applicable.into_iter().fold(coordinate, |coordinate, rule| {
            coordinate.with_exclusion(rule.exclusion_ref())
        })
    }
}
