//! Domain services - the pure BOM computation pipeline.

pub mod aggregator;
pub mod assembler;
pub mod sorter;
pub mod version_properties;

pub use aggregator::SourceAggregator;
pub use assembler::BomAssembler;
pub use sorter::CoordinateSorter;
pub use version_properties::{VersionPropertyAssignment, VersionPropertyNamer};
