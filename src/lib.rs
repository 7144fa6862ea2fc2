//! Sprout materializes a project directory tree on disk from a declarative
//! JSON template: a nested description of directories and files, plus a small
//! configuration block used for placeholder substitution in path names.

/// Tree creation primitives and the recursive template walk
pub mod builder;

/// Command-line interface module for the Sprout application
pub mod cli;

/// Run configuration derived from the template's config block
pub mod config;

/// Common constants used throughout the application
pub mod constants;

/// Error types and handling for the Sprout application
pub mod error;

/// Path normalization and `<token>` placeholder expansion
pub mod format;

/// Logger configuration
pub mod logger;

/// Top-level orchestration: project root creation and tree walk
pub mod processor;

/// Template parsing and validation
/// Decodes the JSON input into a typed tree description
pub mod template;
