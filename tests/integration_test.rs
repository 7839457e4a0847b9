/// Integration tests for the application layer
mod test_utilities;

use bom_builder::prelude::*;
use std::path::PathBuf;
use test_utilities::mocks::*;

fn record(group_id: &str, artifact_id: &str, version: &str) -> DependencyRecord {
    DependencyRecord::new(group_id, artifact_id, version)
}

fn identity() -> BomIdentity {
    BomIdentity::new("org.example", "example-bom", "1.0.0").with_name("Example BOM")
}

fn request(config: BomConfig) -> BomRequest {
    BomRequest::new(PathBuf::from("."), config)
}

#[test]
fn test_build_bom_happy_path() {
    let sets = DependencySets {
        resolved: vec![
            record("org.zeta", "z-lib", "3.1"),
            record("org.alpha", "a-lib", "1.0"),
        ],
        ..Default::default()
    };
    let use_case = BuildBomUseCase::new(MockSourceReader::new(sets), MockProgressReporter::new());

    let config = BomConfig {
        identity: identity(),
        ..Default::default()
    };
    let response = use_case.execute(request(config)).unwrap();

    let bom = response.bom;
    assert_eq!(bom.identity.name, "Example BOM");
    assert_eq!(bom.managed_dependencies.len(), 2);
    // Deterministic order: ascending group, then artifact.
    assert_eq!(bom.managed_dependencies[0].group_id(), "org.alpha");
    assert_eq!(bom.managed_dependencies[1].group_id(), "org.zeta");
    assert_eq!(
        bom.properties.get("project.build.sourceEncoding"),
        Some("UTF-8")
    );
}

#[test]
fn test_duplicate_coordinate_across_sources_appears_twice() {
    // Sources are concatenated, not set-unioned.
    let sets = DependencySets {
        resolved: vec![record("g", "a", "1.0")],
        declared: vec![record("g", "a", "1.0")],
        ..Default::default()
    };
    let use_case = BuildBomUseCase::new(MockSourceReader::new(sets), MockProgressReporter::new());

    let config = BomConfig {
        identity: identity(),
        sources: SourceSelection {
            use_all_resolved: true,
            use_declared: true,
            use_declared_management: false,
        },
        ..Default::default()
    };
    let response = use_case.execute(request(config)).unwrap();

    assert_eq!(response.bom.managed_dependencies.len(), 2);
    assert_eq!(
        response.bom.managed_dependencies[0].key(),
        response.bom.managed_dependencies[1].key()
    );
}

#[test]
fn test_exclusion_patterns_and_bom_exclusion_rules() {
    let sets = DependencySets {
        resolved: vec![
            record("org.kept", "widget", "1.0"),
            record("org.dropped", "gadget", "2.0"),
        ],
        ..Default::default()
    };
    let use_case = BuildBomUseCase::new(MockSourceReader::new(sets), MockProgressReporter::new());

    let config = BomConfig {
        identity: identity(),
        exclusion_patterns: vec![ExclusionPattern::new(
            Some("org.dropped".to_string()),
            Some("*".to_string()),
        )],
        bom_exclusions: vec![BomExclusionRule::new(
            "org.kept",
            "widget",
            "commons-logging",
            "commons-logging",
        )],
        ..Default::default()
    };
    let response = use_case.execute(request(config)).unwrap();

    let dependencies = &response.bom.managed_dependencies;
    assert_eq!(dependencies.len(), 1);
    assert_eq!(dependencies[0].group_id(), "org.kept");
    assert_eq!(dependencies[0].exclusions().len(), 1);
    assert_eq!(dependencies[0].exclusions()[0].group_id, "commons-logging");
}

#[test]
fn test_version_properties_with_rewrite_end_to_end() {
    let sets = DependencySets {
        resolved: vec![record("g1", "a1", "1.0"), record("g1", "a2", "1.0")],
        ..Default::default()
    };
    let use_case = BuildBomUseCase::new(MockSourceReader::new(sets), MockProgressReporter::new());

    let config = BomConfig {
        identity: identity(),
        generate_version_properties: true,
        rewrite_versions_as_properties: true,
        ..Default::default()
    };
    let response = use_case.execute(request(config)).unwrap();

    let bom = response.bom;
    assert_eq!(bom.managed_dependencies[0].version(), "${version.g1}");
    assert_eq!(bom.managed_dependencies[1].version(), "${version.g1}");
    assert_eq!(bom.properties.get("version.g1"), Some("1.0"));
    // The encoding property is inserted before derived version properties.
    let keys: Vec<&str> = bom.properties.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["project.build.sourceEncoding", "version.g1"]);
}

#[test]
fn test_rewrite_without_generation_fails_before_aggregation() {
    let use_case = BuildBomUseCase::new(
        MockSourceReader::new(DependencySets::default()),
        MockProgressReporter::new(),
    );

    let config = BomConfig {
        identity: identity(),
        rewrite_versions_as_properties: true,
        ..Default::default()
    };
    let result = use_case.execute(request(config));

    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("Invalid configuration"));
}

#[test]
fn test_malformed_record_is_reported_with_its_position() {
    let sets = DependencySets {
        resolved: vec![
            record("g", "a", "1.0"),
            DependencyRecord {
                group_id: Some("g".to_string()),
                artifact_id: None,
                version: Some("1.0".to_string()),
                ..Default::default()
            },
        ],
        ..Default::default()
    };
    let use_case = BuildBomUseCase::new(MockSourceReader::new(sets), MockProgressReporter::new());

    let config = BomConfig {
        identity: identity(),
        ..Default::default()
    };
    let result = use_case.execute(request(config));

    assert!(result.is_err());
    let message = format!("{}", result.unwrap_err());
    assert!(message.contains("'resolved' source"));
    assert!(message.contains("index 1"));
}

#[test]
fn test_reader_failure_is_propagated() {
    let use_case = BuildBomUseCase::new(MockSourceReader::with_failure(), MockProgressReporter::new());

    let config = BomConfig {
        identity: identity(),
        ..Default::default()
    };
    let result = use_case.execute(request(config));

    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("Mock dependency source failure"));
}

#[test]
fn test_empty_bom_emits_a_warning() {
    let reporter = MockProgressReporter::new();
    let use_case = BuildBomUseCase::new(
        MockSourceReader::new(DependencySets::default()),
        &reporter,
    );

    let config = BomConfig {
        identity: identity(),
        ..Default::default()
    };
    let response = use_case.execute(request(config)).unwrap();

    assert!(response.bom.managed_dependencies.is_empty());
    assert!(reporter
        .messages()
        .iter()
        .any(|message| message.contains("manages no dependencies")));
}

#[test]
fn test_formatting_pipeline_produces_pom_document() {
    let sets = DependencySets {
        resolved: vec![record("g1", "a1", "1.0")],
        ..Default::default()
    };
    let use_case = BuildBomUseCase::new(MockSourceReader::new(sets), MockProgressReporter::new());

    let config = BomConfig {
        identity: identity(),
        generate_version_properties: true,
        rewrite_versions_as_properties: true,
        ..Default::default()
    };
    let response = use_case.execute(request(config)).unwrap();

    let output = PomFormatter::new().format(&response.bom).unwrap();
    assert!(output.contains("<artifactId>example-bom</artifactId>"));
    assert!(output.contains("<version.g1>1.0</version.g1>"));
    assert!(output.contains("<version>${version.g1}</version>"));
}
