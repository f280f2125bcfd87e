//! Error handling for dropin.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

/// Every failure dropin can report.
///
/// Fatal conditions (a missing or invalid source root, an uncreatable target)
/// propagate to `main`. Per-item failures are reported as `ProcessError` and
/// downgraded to warnings by the copier and the entity driver.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Failed to walk the source tree. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Failed to parse exclusion pattern. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Invalid regular expression. Original error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Failed to parse config file '{config_path}': {e}.")]
    ConfigParseError { config_path: String, e: String },

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Cannot proceed: source directory '{source_dir}' does not exist.")]
    SourceDoesNotExistError { source_dir: String },

    #[error("Cannot proceed: '{source_dir}' is not a valid AppTemplate directory (missing '{marker}').")]
    InvalidSourceError { source_dir: String, marker: String },

    #[error("Cannot proceed: could not locate an AppTemplate source. Searched: {searched}.")]
    SourceNotFoundError { searched: String },

    #[error("Cannot proceed: target directory '{target_dir}' could not be created. Original error: {e}")]
    TargetCreationError { target_dir: String, e: io::Error },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error("Command '{command}' failed with status: {status}")]
    CommandError { command: String, status: ExitStatus },
}

/// Convenience type alias for Results with `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(exit_codes::FAILURE);
}
