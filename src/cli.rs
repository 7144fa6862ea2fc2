//! Command-line interface implementation for Sprout.
//! Provides argument parsing using clap.

use clap::{error::ErrorKind, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for Sprout.
#[derive(Parser, Debug)]
#[command(author, version, about = "Sprout: declarative project tree scaffolding tool", long_about = None)]
pub struct Args {
    /// Command to run; `init` scaffolds a project, anything else prints
    /// the version
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Path to the JSON template file (required by `init`)
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 and no output if the command word is missing
/// * With clap's default error handling for other argument errors
///
/// # Note
/// The version fallback applies to word arguments only; a flag-shaped first
/// argument (e.g. `-x`) is handled by clap's own error path.
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
