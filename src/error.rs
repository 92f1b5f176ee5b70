use colored::Colorize;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("{name} already exists!")]
    NameCollisionError { name: String },

    #[error("Cannot list the working directory '{dir}'. Original error: {source}")]
    DirectoryListError { dir: String, source: std::io::Error },

    #[error("Unknown template '{key}'. Run with --list to see available templates.")]
    UnknownTemplateError { key: String },

    #[error("Invalid download reference '{reference}'.")]
    InvalidReferenceError { reference: String },

    #[error("Failed to download template from '{reference}'. Original error: {source}")]
    DownloadError { reference: String, source: git2::Error },

    #[error("Downloaded '{reference}' but could not remove '{path}'. Original error: {source}")]
    DownloadCleanupError { reference: String, path: String, source: std::io::Error },

    #[error("Cannot read manifest '{path}'. Original error: {source}")]
    ManifestNotFoundError { path: String, source: std::io::Error },

    #[error("Failed to parse manifest '{path}': {reason}")]
    ManifestParseError { path: String, reason: String },

    #[error("Cannot write manifest '{path}'. Original error: {source}")]
    ManifestWriteError { path: String, source: std::io::Error },

    /// The terminal stream closed or failed while a question was pending.
    #[error("Prompt failed: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message in red to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err.to_string().red());
    std::process::exit(exit_codes::FAILURE);
}
