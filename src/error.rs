//! Error handling for the blockbaker application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for blockbaker operations.
///
/// This enum represents all possible errors that can occur within the application.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents malformed JSON in a model, lang or config file
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in user input, raised before any file is touched
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors raised while rendering a source stub
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// Represents failures of the interactive prompt (closed terminal, interrupted input)
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// The `models` directory does not exist, so the mod id or project path is wrong.
    #[error("No model directory found at '{path}'.")]
    ModelRootNotFound { path: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
