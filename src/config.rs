//! Run configuration for Sprout.
//! The project name is extracted once from the template's config block and
//! threaded by reference into path formatting and tree building; it is never
//! mutated after construction.

use crate::error::{SproutError, SproutResult};
use indexmap::IndexMap;

/// Configuration state for a single scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the project root directory; also the substitution value
    /// for the reserved `<main_package>` placeholder
    pub project_name: String,
}

impl Config {
    pub fn new<S: Into<String>>(project_name: S) -> Self {
        Self { project_name: project_name.into() }
    }

    /// Builds the run configuration from a template's config mapping.
    ///
    /// # Arguments
    /// * `config` - The decoded `config` block of the template
    ///
    /// # Errors
    /// * `SproutError::ConfigError` if `config.name` is absent or not a string
    pub fn from_template_config(
        config: &IndexMap<String, serde_json::Value>,
    ) -> SproutResult<Self> {
        let name = config.get("name").ok_or_else(|| {
            SproutError::ConfigError(
                "missing config.name field in template".to_string(),
            )
        })?;

        let name = name.as_str().ok_or_else(|| {
            SproutError::ConfigError(
                "config.name field must be a string".to_string(),
            )
        })?;

        Ok(Self::new(name))
    }
}
