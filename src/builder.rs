//! Tree creation primitives and the recursive template walk.
//! Every path is placeholder-expanded and normalized before it touches the
//! filesystem. Creation is idempotent-by-presence: an entry that already
//! exists at the target path, whatever its type, counts as success.

use crate::config::Config;
use crate::error::{SproutError, SproutResult};
use crate::format::{expand_placeholders, format_path};
use crate::template::TemplateNode;
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::Path;

/// Directory permissions: owner read/write/execute, group/other read/execute.
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

fn resolve_path(path: &str, config: &Config) -> String {
    let expanded = expand_placeholders(path, config);
    format_path(&expanded)
}

fn make_dir(path: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        fs::DirBuilder::new().mode(DIR_MODE).create(path)
    }
    #[cfg(not(unix))]
    {
        fs::DirBuilder::new().create(path)
    }
}

/// Creates a directory at the given template path.
///
/// The path is placeholder-expanded and normalized first. If an entry
/// already exists at the resolved path, the call succeeds without touching
/// the filesystem.
///
/// # Errors
/// * `SproutError::PathError` if `path` is empty
/// * `SproutError::IoError` if the directory cannot be created
pub fn create_dir(path: &str, config: &Config) -> SproutResult<()> {
    if path.is_empty() {
        return Err(SproutError::PathError("empty path is not valid".to_string()));
    }

    let resolved = resolve_path(path, config);
    if Path::new(&resolved).exists() {
        debug!("Skipping existing entry {}", resolved);
        return Ok(());
    }

    make_dir(Path::new(&resolved)).map_err(SproutError::IoError)?;

    println!("Created {}", resolved);
    Ok(())
}

/// Creates an empty regular file at the given template path.
///
/// Same resolution and idempotence rules as [`create_dir`].
///
/// # Errors
/// * `SproutError::PathError` if `path` is empty
/// * `SproutError::IoError` if the file cannot be created
pub fn create_file(path: &str, config: &Config) -> SproutResult<()> {
    if path.is_empty() {
        return Err(SproutError::PathError("empty path is not valid".to_string()));
    }

    let resolved = resolve_path(path, config);
    if Path::new(&resolved).exists() {
        debug!("Skipping existing entry {}", resolved);
        return Ok(());
    }

    fs::File::create(&resolved).map_err(SproutError::IoError)?;

    println!("Created {}", resolved);
    Ok(())
}

/// Recursively materializes a tree of template nodes under a path prefix.
///
/// File leaves become empty files at `prefix + name`; directory nodes are
/// created at `prefix + name + "/"` before their children. Any creation
/// error propagates immediately; entries already created remain on disk.
pub fn traverse_node(
    node: &IndexMap<String, TemplateNode>,
    prefix: &str,
    config: &Config,
) -> SproutResult<()> {
    for (name, value) in node {
        match value {
            TemplateNode::File => {
                let full_path = format!("{}{}", prefix, name);
                create_file(&full_path, config)?;
            }
            TemplateNode::Directory(children) => {
                let full_path = format!("{}{}/", prefix, name);
                create_dir(&full_path, config)?;
                traverse_node(children, &full_path, config)?;
            }
        }
    }

    Ok(())
}
