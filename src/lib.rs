//! bom-builder - Bill of Materials generation tool
//!
//! This library builds a BOM (a POM whose sole purpose is to pin
//! consistent versions for a set of dependency coordinates) from a
//! project's already-resolved dependency sets, following hexagonal
//! architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_generation`): Pure aggregation, sorting and
//!   version-property logic plus the domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types and the Result alias
//!
//! # Example
//!
//! ```no_run
//! use bom_builder::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let source_reader = FileSystemSourceReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = BuildBomUseCase::new(source_reader, progress_reporter);
//!
//! // Execute
//! let config = BomConfig {
//!     identity: BomIdentity::new("org.example", "example-bom", "1.0.0"),
//!     ..Default::default()
//! };
//! let request = BomRequest::new(PathBuf::from("."), config);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = PomFormatter::new();
//! let output = formatter.format(&response.bom)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bom_generation;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemSourceReader, FileSystemWriter, StdoutPresenter, DESCRIPTOR_FILENAME,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, PomFormatter};
    pub use crate::application::dto::{BomRequest, BomResponse};
    pub use crate::application::use_cases::BuildBomUseCase;
    pub use crate::bom_generation::domain::{
        BomConfig, BomExclusionRule, BomIdentity, BomResult, Coordinate, DependencyRecord,
        DependencyRef, DependencySets, ExclusionPattern, OrderedProperties, SourceSelection,
    };
    pub use crate::bom_generation::services::{
        BomAssembler, CoordinateSorter, SourceAggregator, VersionPropertyNamer,
    };
    pub use crate::ports::outbound::{
        BomFormatter, DependencySourceReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
