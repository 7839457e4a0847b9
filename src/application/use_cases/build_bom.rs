use crate::application::dto::{BomRequest, BomResponse};
use crate::bom_generation::services::BomAssembler;
use crate::ports::outbound::{DependencySourceReader, ProgressReporter};
use crate::shared::Result;

/// BuildBomUseCase - Core use case for BOM generation
///
/// Orchestrates reading the project's dependency sets through the
/// injected reader and running the pure assembly pipeline.
///
/// # Type Parameters
/// * `SR` - DependencySourceReader implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildBomUseCase<SR, PR> {
    source_reader: SR,
    progress_reporter: PR,
}

impl<SR, PR> BuildBomUseCase<SR, PR>
where
    SR: DependencySourceReader,
    PR: ProgressReporter,
{
    /// Creates a new BuildBomUseCase with injected dependencies
    pub fn new(source_reader: SR, progress_reporter: PR) -> Self {
        Self {
            source_reader,
            progress_reporter,
        }
    }

    /// Executes the BOM build use case
    ///
    /// # Arguments
    /// * `request` - project path plus the merged build configuration
    ///
    /// # Returns
    /// BomResponse containing the assembled BOM
    pub fn execute(&self, request: BomRequest) -> Result<BomResponse> {
        self.progress_reporter.report(&format!(
            "📖 Reading dependency sets from: {}",
            request.project_path.display()
        ));

        let sets = self
            .source_reader
            .read_dependency_sets(&request.project_path)?;

        let selection = &request.config.sources;
        if selection.use_all_resolved {
            self.progress_reporter
                .report(&format!("✅ Resolved dependencies: {}", sets.resolved.len()));
        }
        if selection.use_declared {
            self.progress_reporter
                .report(&format!("✅ Declared dependencies: {}", sets.declared.len()));
        }
        if selection.use_declared_management {
            self.progress_reporter.report(&format!(
                "✅ Dependency-management entries: {}",
                sets.declared_management.len()
            ));
        }

        let bom = BomAssembler::assemble(&sets, &request.config)?;

        if bom.managed_dependencies.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Warning: The generated BOM manages no dependencies.");
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Assembled BOM with {} managed dependencies and {} properties",
            bom.managed_dependencies.len(),
            bom.properties.len()
        ));

        Ok(BomResponse::new(bom))
    }
}
