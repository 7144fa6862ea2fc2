//! Template parsing and validation for Sprout.
//! Decodes the JSON input into a typed representation: a flat configuration
//! mapping plus a tree of named directories and file markers. Malformed tree
//! shapes are rejected here, up front, before any filesystem work begins.

use crate::constants::FILE_MARKER;
use crate::error::{SproutError, SproutResult};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// One node of the template tree: either a file leaf or a directory holding
/// further named nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateNode {
    /// Create an empty regular file with the entry's name
    File,
    /// Create a directory with the entry's name and recurse into it
    Directory(IndexMap<String, TemplateNode>),
}

impl TemplateNode {
    /// Validates and converts a decoded JSON value into a template node.
    ///
    /// The string marker `"file"` becomes a file leaf; a JSON object becomes
    /// a directory, recursing on its values. Anything else is a structural
    /// error naming the offending entry.
    pub fn from_value(name: &str, value: &serde_json::Value) -> SproutResult<Self> {
        match value {
            serde_json::Value::String(s) if s == FILE_MARKER => Ok(Self::File),
            serde_json::Value::Object(entries) => {
                let mut children = IndexMap::new();
                for (child_name, child_value) in entries {
                    children.insert(
                        child_name.clone(),
                        Self::from_value(child_name, child_value)?,
                    );
                }
                Ok(Self::Directory(children))
            }
            _ => Err(SproutError::StructureError(format!(
                "entry '{}' must be \"{}\" or a nested object",
                name, FILE_MARKER
            ))),
        }
    }
}

/// Raw decoded shape of the template file, prior to tree validation.
#[derive(Debug, Deserialize)]
struct RawTemplate {
    config: IndexMap<String, serde_json::Value>,
    project: serde_json::Value,
}

/// The parsed template: configuration block plus validated tree description.
/// Constructed once per invocation and immutable thereafter.
#[derive(Debug)]
pub struct Template {
    /// Flat configuration mapping; arbitrary extra keys are retained but
    /// ignored beyond the required `name` field
    pub config: IndexMap<String, serde_json::Value>,
    /// Root entries of the project tree
    pub project: IndexMap<String, TemplateNode>,
}

/// Loads and validates a template from a JSON file.
///
/// # Arguments
/// * `template_path` - Path to the template file
///
/// # Errors
/// * `SproutError::IoError` if the file cannot be read
/// * `SproutError::ParseError` identifying the file path if the JSON is
///   malformed
/// * `SproutError::StructureError` if the project body is not an object or
///   any tree entry has an invalid shape
pub fn load_template<P: AsRef<Path>>(template_path: P) -> SproutResult<Template> {
    let template_path = template_path.as_ref();
    debug!("Loading template from {}", template_path.display());

    let content =
        std::fs::read_to_string(template_path).map_err(SproutError::IoError)?;

    let raw: RawTemplate =
        serde_json::from_str(&content).map_err(|e| SproutError::ParseError {
            path: template_path.display().to_string(),
            source: e,
        })?;

    let project = match TemplateNode::from_value("project", &raw.project)? {
        TemplateNode::Directory(entries) => entries,
        // A bare "file" marker as the whole project body concerns the whole
        // tree, not one branch.
        TemplateNode::File => {
            return Err(SproutError::StructureError(
                "project body must be an object".to_string(),
            ))
        }
    };

    Ok(Template { config: raw.config, project })
}
