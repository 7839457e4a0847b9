use clap::Parser;

use crate::adapters::outbound::formatters::{JsonFormatter, PomFormatter};
use crate::ports::outbound::BomFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pom,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pom" | "xml" => Ok(OutputFormat::Pom),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'pom' or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Returns
    /// A boxed BomFormatter trait object appropriate for this format
    pub fn create_formatter(&self) -> Box<dyn BomFormatter> {
        match self {
            OutputFormat::Pom => Box::new(PomFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Pom => "📝 Generating BOM POM output...",
            OutputFormat::Json => "📝 Generating BOM JSON output...",
        }
    }
}

/// Build a Bill of Materials POM from a project's dependency sets
#[derive(Parser, Debug)]
#[command(name = "bom-builder")]
#[command(version)]
#[command(about = "Build a Bill of Materials POM from a project's dependency sets", long_about = None)]
pub struct Args {
    /// Output format: pom or json (defaults to pom, config file value applies when omitted)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory containing bom-deps.toml (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a config file (defaults to bom-builder.config.yml in the project directory)
    #[arg(long)]
    pub config: Option<String>,

    /// Exclude dependencies matching 'groupId:artifactId' (the literal * wildcards a whole field).
    /// Can be specified multiple times: -e "com.example:*" -e "*:commons-logging"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// BOM groupId
    #[arg(long = "bom-group-id", value_name = "GROUP_ID")]
    pub bom_group_id: Option<String>,

    /// BOM artifactId
    #[arg(long = "bom-artifact-id", value_name = "ARTIFACT_ID")]
    pub bom_artifact_id: Option<String>,

    /// BOM version
    #[arg(long = "bom-version", value_name = "VERSION")]
    pub bom_version: Option<String>,

    /// BOM name
    #[arg(long = "bom-name", value_name = "NAME")]
    pub bom_name: Option<String>,

    /// BOM description
    #[arg(long = "bom-description", value_name = "DESCRIPTION")]
    pub bom_description: Option<String>,

    /// Skip the resolved (transitive closure) dependency source
    #[arg(long = "no-resolved")]
    pub no_resolved: bool,

    /// Include the declared (direct) dependency source
    #[arg(long)]
    pub declared: bool,

    /// Include the declared dependency-management source
    #[arg(long = "dependency-management")]
    pub dependency_management: bool,

    /// Derive shared version.<groupId> properties from the managed dependencies
    #[arg(long = "version-properties")]
    pub version_properties: bool,

    /// Rewrite dependency versions as ${property} references (requires --version-properties)
    #[arg(long = "rewrite-versions")]
    pub rewrite_versions: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
