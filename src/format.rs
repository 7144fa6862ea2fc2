//! Path normalization and placeholder expansion for Sprout.
//! Every path taken from a template passes through this module before it
//! reaches the filesystem: placeholders are expanded first, then the result
//! is anchored to the working directory or an explicit absolute root.

use crate::config::Config;
use crate::constants::MAIN_PACKAGE_TOKEN;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

// Tokens are one or more non-`>` characters between angle brackets.
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid token pattern"))
}

/// Builds the placeholder lookup table for a run.
///
/// Keys are the full literal token text, angle brackets included. Currently
/// a single reserved entry: `<main_package>` maps to the project name.
pub fn default_placeholders(config: &Config) -> IndexMap<String, String> {
    let mut placeholders = IndexMap::new();
    placeholders
        .insert(MAIN_PACKAGE_TOKEN.to_string(), config.project_name.clone());

    placeholders
}

/// Expands `<token>` placeholders in a string.
///
/// Scans for substrings of the form `<...>` and, for each distinct token
/// found in the lookup table, replaces every occurrence of that exact token
/// text with its mapped value. Tokens with no table entry are left verbatim.
/// Replacement is per-token exact text, so distinct tokens cannot clobber
/// each other.
///
/// # Arguments
/// * `s` - Input string, typically a path segment from a template
/// * `config` - Run configuration supplying the placeholder values
pub fn expand_placeholders(s: &str, config: &Config) -> String {
    let placeholders = default_placeholders(config);

    let mut expanded = s.to_string();
    for token in token_pattern().find_iter(s) {
        if let Some(value) = placeholders.get(token.as_str()) {
            expanded = expanded.replace(token.as_str(), value);
        }
    }

    expanded
}

/// Normalizes a path to a consistent relative-or-absolute form.
///
/// Paths starting with `/` or `./` are returned unchanged; anything else,
/// including a leading `.` not followed by `/`, is prefixed with `./` so that
/// created entries are unambiguously anchored to the working directory.
///
/// Empty input is a caller error; creation primitives reject empty paths
/// before calling this function.
pub fn format_path(path: &str) -> String {
    if path.starts_with('/') || path.starts_with("./") {
        path.to_string()
    } else {
        format!("./{}", path)
    }
}
