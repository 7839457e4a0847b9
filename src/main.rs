use bom_builder::adapters::outbound::console::StderrProgressReporter;
use bom_builder::adapters::outbound::filesystem::{
    FileSystemSourceReader, FileSystemWriter, StdoutPresenter,
};
use bom_builder::application::dto::BomRequest;
use bom_builder::application::use_cases::BuildBomUseCase;
use bom_builder::bom_generation::domain::{
    BomConfig, BomExclusionRule, BomIdentity, ExclusionPattern, SourceSelection,
};
use bom_builder::cli::{Args, OutputFormat};
use bom_builder::config::{self, ConfigFile};
use bom_builder::ports::outbound::OutputPresenter;
use bom_builder::shared::error::BomError;
use bom_builder::shared::{ExitCode, Result};
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);
    validate_project_path(&project_path)?;

    // Load the config file: an explicit --config path must exist,
    // otherwise quietly discover one in the project directory.
    let config_file = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(&project_path)?.unwrap_or_default(),
    };

    let format = resolve_format(&args, &config_file)?;
    let output = args.output.clone().or_else(|| config_file.output.clone());
    let bom_config = build_bom_config(&args, &config_file)?;

    // Create adapters (Dependency Injection)
    let source_reader = FileSystemSourceReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = BuildBomUseCase::new(source_reader, progress_reporter);

    // Execute use case
    let request = BomRequest::new(project_path, bom_config);
    let response = use_case.execute(request)?;

    // Format output
    eprintln!("{}", format.progress_message());
    let formatter = format.create_formatter();
    let formatted_output = formatter.format(&response.bom)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(BomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

fn resolve_format(args: &Args, config_file: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match config_file.format.as_deref() {
        Some(value) => OutputFormat::from_str(value).map_err(|message| {
            BomError::InvalidConfiguration {
                message,
                hint: "Use 'pom' or 'json' for the config file's 'format' field".to_string(),
            }
            .into()
        }),
        None => Ok(OutputFormat::Pom),
    }
}

/// Merges command-line flags over the config file into the build
/// configuration. CLI values win wherever both are present.
fn build_bom_config(args: &Args, config_file: &ConfigFile) -> Result<BomConfig> {
    let identity = resolve_identity(args, config_file)?;

    let mut sources = SourceSelection::default();
    if let Some(section) = &config_file.sources {
        if let Some(resolved) = section.resolved {
            sources.use_all_resolved = resolved;
        }
        if let Some(declared) = section.declared {
            sources.use_declared = declared;
        }
        if let Some(management) = section.dependency_management {
            sources.use_declared_management = management;
        }
    }
    if args.no_resolved {
        sources.use_all_resolved = false;
    }
    if args.declared {
        sources.use_declared = true;
    }
    if args.dependency_management {
        sources.use_declared_management = true;
    }

    let mut exclusion_patterns = Vec::new();
    if let Some(entries) = &config_file.exclude_dependencies {
        for entry in entries {
            exclusion_patterns.push(ExclusionPattern::new(
                entry.group_id.clone(),
                entry.artifact_id.clone(),
            ));
        }
    }
    for pattern in &args.exclude {
        exclusion_patterns.push(ExclusionPattern::parse(pattern)?);
    }

    let bom_exclusions = config_file
        .add_exclusions
        .iter()
        .flatten()
        .map(|entry| {
            BomExclusionRule::new(
                entry.dependency_group_id.clone(),
                entry.dependency_artifact_id.clone(),
                entry.exclusion_group_id.clone(),
                entry.exclusion_artifact_id.clone(),
            )
        })
        .collect();

    Ok(BomConfig {
        identity,
        sources,
        exclusion_patterns,
        bom_exclusions,
        generate_version_properties: args.version_properties
            || config_file.version_properties.unwrap_or(false),
        rewrite_versions_as_properties: args.rewrite_versions
            || config_file.rewrite_versions.unwrap_or(false),
    })
}

fn resolve_identity(args: &Args, config_file: &ConfigFile) -> Result<BomIdentity> {
    let bom_section = config_file.bom.as_ref();
    let pick = |cli: &Option<String>, file: Option<&String>| -> Option<String> {
        cli.clone().or_else(|| file.cloned())
    };

    let group_id = pick(&args.bom_group_id, bom_section.and_then(|b| b.group_id.as_ref()));
    let artifact_id = pick(
        &args.bom_artifact_id,
        bom_section.and_then(|b| b.artifact_id.as_ref()),
    );
    let version = pick(&args.bom_version, bom_section.and_then(|b| b.version.as_ref()));

    let (group_id, artifact_id, version) = match (group_id, artifact_id, version) {
        (Some(group_id), Some(artifact_id), Some(version)) => (group_id, artifact_id, version),
        _ => {
            return Err(BomError::InvalidConfiguration {
                message: "the BOM's groupId, artifactId and version must all be provided"
                    .to_string(),
                hint: "Set them in the config file's 'bom' section or via --bom-group-id, \
                       --bom-artifact-id and --bom-version"
                    .to_string(),
            }
            .into())
        }
    };

    let mut identity = BomIdentity::new(group_id, artifact_id, version);
    if let Some(name) = pick(&args.bom_name, bom_section.and_then(|b| b.name.as_ref())) {
        identity = identity.with_name(name);
    }
    if let Some(description) = pick(
        &args.bom_description,
        bom_section.and_then(|b| b.description.as_ref()),
    ) {
        identity = identity.with_description(description);
    }
    Ok(identity)
}
