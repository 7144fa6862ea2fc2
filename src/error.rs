//! Error handling for the Sprout application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Sprout operations.
///
/// This enum represents all possible errors that can occur within the Sprout
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum SproutError {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during configuration processing,
    /// such as a missing or non-string `config.name` field
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents a template tree entry whose value is neither the `"file"`
    /// marker nor a nested object
    #[error("Invalid template structure: {0}.")]
    StructureError(String),

    /// Represents malformed JSON in the template input file
    #[error("Unable to parse template at {path}: {source}.")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Represents an invalid path handed to a creation primitive
    #[error("Invalid path: {0}.")]
    PathError(String),
}

/// Convenience type alias for Results with SproutError as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type SproutResult<T> = Result<T, SproutError>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The SproutError to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: SproutError) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
