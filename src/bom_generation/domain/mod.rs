//! Domain models for BOM generation.

pub mod bom;
pub mod coordinate;
pub mod exclusion;
pub mod properties;

pub use bom::{BomConfig, BomIdentity, BomResult, SourceSelection};
pub use coordinate::{Coordinate, DependencyRecord, DependencyRef, DependencySets};
pub use exclusion::{BomExclusionRule, ExclusionPattern};
pub use properties::OrderedProperties;
