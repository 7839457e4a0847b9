use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the BOM was generated and written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration error, malformed input, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for BOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum BomError {
    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfiguration { message: String, hint: String },

    #[error("Malformed dependency record in '{source_name}' source at index {index}: {details}\n\n💡 Hint: Every dependency entry must declare both groupId and artifactId")]
    MalformedRecord {
        // Named `source_name` rather than `source` because thiserror treats a
        // field named `source` as the error's cause, which must impl Error.
        source_name: String,
        index: usize,
        details: String,
    },

    #[error("Dependency descriptor not found: {path}\n\n💡 Hint: {suggestion}")]
    DescriptorNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency descriptor: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the descriptor is valid TOML with [[resolved]], [[declared]] or [[dependency-management]] entries")]
    DescriptorParseError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
