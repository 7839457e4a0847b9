use crate::bom_generation::domain::Coordinate;
use std::cmp::Ordering;

/// CoordinateSorter - orders the merged candidate list for reproducible
/// output.
pub struct CoordinateSorter;

impl CoordinateSorter {
    /// Sorts ascending by groupId, ties broken ascending by artifactId,
    /// using ordinal case-sensitive comparison.
    ///
    /// The sort is stable: coordinates with identical group/artifact
    /// (duplicates from aggregation, or the same coordinate with a
    /// different classifier or type) retain their relative input order.
    pub fn sort(mut coordinates: Vec<Coordinate>) -> Vec<Coordinate> {
        coordinates.sort_by(Self::compare);
        coordinates
    }

    fn compare(a: &Coordinate, b: &Coordinate) -> Ordering {
        a.group_id()
            .cmp(b.group_id())
            .then_with(|| a.artifact_id().cmp(b.artifact_id()))
    }
}
