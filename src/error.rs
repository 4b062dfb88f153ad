//! Error handling for cpp-project.
//! Defines the error taxonomy of the generation pipeline and the result alias used
//! throughout the crate.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while resolving, installing, merging or initializing a project.
///
/// Every variant that involves the filesystem carries the offending path so the
/// message printed by [`default_error_handler`] identifies it.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed project name, override, or rendered path segment
    #[error("Invalid input: {0}.")]
    InvalidInput(String),

    /// A template subtree selected by the project type does not exist
    #[error("Template directory '{}' does not exist.", .path.display())]
    TemplateMissing { path: PathBuf },

    /// A destination directory or file could not be created
    #[error("Failed to write '{}': {source}.", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template or installed file could not be read
    #[error("Failed to read '{}': {source}.", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A snippet fragment has no matching insertion point in its host file
    #[error("Snippet '{}' has no insertion point '{marker}' in '{}'.", .snippet.display(), .host.display())]
    MergeTargetNotFound { snippet: PathBuf, host: PathBuf, marker: String },

    /// Version control initialization failed
    #[error("Version control initialization failed: {0}.")]
    ExternalToolFailure(#[from] git2::Error),

    /// The placeholder table violates its naming or disjointness rules
    #[error("Placeholder registry error: {0}.")]
    PlaceholderConflict(String),

    #[error("Output directory '{output_dir}' already exists and is not empty. Use --force to install into it.")]
    OutputDirectoryExists { output_dir: String },

    #[error("Pattern error: {0}.")]
    Pattern(#[from] regex::Error),

    #[error("Prompt error: {0}.")]
    Prompt(#[from] dialoguer::Error),

    #[error("Serialization error: {0}.")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Wraps an IO error raised while writing `path`.
    pub fn write<P: AsRef<Path>>(path: P) -> impl FnOnce(io::Error) -> Error {
        let path = path.as_ref().to_path_buf();
        move |source| Error::WriteError { path, source }
    }

    /// Wraps an IO error raised while reading `path`.
    pub fn read<P: AsRef<Path>>(path: P) -> impl FnOnce(io::Error) -> Error {
        let path = path.as_ref().to_path_buf();
        move |source| Error::ReadError { path, source }
    }

    /// Name of the pipeline stage an error belongs to, used in user-facing messages.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) | Error::PlaceholderConflict(_) | Error::Pattern(_) => {
                "configuration"
            }
            Error::TemplateMissing { .. }
            | Error::WriteError { .. }
            | Error::ReadError { .. }
            | Error::OutputDirectoryExists { .. } => "installation",
            Error::MergeTargetNotFound { .. } => "snippet merge",
            Error::ExternalToolFailure(_) => "version control",
            Error::Prompt(_) | Error::Json(_) | Error::IoError(_) => "project creation",
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the stage and message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error during {}: {}", err.stage(), err);
    std::process::exit(1);
}
