//! Top-level orchestration for Sprout.
//! Wires the run configuration, project root creation, and the template walk.

use crate::builder::{create_dir, traverse_node};
use crate::config::Config;
use crate::error::SproutResult;
use crate::template::Template;
use log::debug;

/// Materializes a parsed template on disk.
///
/// # Flow
/// 1. Builds the run configuration from the template's config block
/// 2. Creates the project root directory named after the project
/// 3. Walks the project tree with the root as path prefix
///
/// # Errors
/// * `SproutError::ConfigError` if `config.name` is absent or not a string
/// * Any creation error from the walk, propagated unchanged; entries already
///   created remain on disk
pub fn bootstrap(template: &Template) -> SproutResult<()> {
    let config = Config::from_template_config(&template.config)?;
    debug!("Bootstrapping project '{}'", config.project_name);

    create_dir(&config.project_name, &config)?;

    let root_prefix = format!("{}/", config.project_name);
    traverse_node(&template.project, &root_prefix, &config)
}
