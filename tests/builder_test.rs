use indexmap::IndexMap;
use sprout::builder::{create_dir, create_file, traverse_node};
use sprout::config::Config;
use sprout::error::SproutError;
use sprout::template::TemplateNode;
use tempfile::TempDir;

// Absolute paths pass through format_path unchanged, so tests can sandbox
// inside a TempDir without changing the working directory.
fn path_in(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).display().to_string()
}

#[test]
fn test_create_dir_happy_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new("demo");
    let target = path_in(&temp_dir, "new_dir");

    create_dir(&target, &config).unwrap();

    let meta = std::fs::metadata(&target).unwrap();
    assert!(meta.is_dir());
}

#[cfg(unix)]
#[test]
fn test_create_dir_mode() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let config = Config::new("demo");
    let target = path_in(&temp_dir, "mode_dir");

    create_dir(&target, &config).unwrap();

    let meta = std::fs::metadata(&target).unwrap();
    assert_eq!(meta.permissions().mode() & 0o777, 0o755);
}

#[test]
fn test_create_dir_already_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new("demo");
    let target = path_in(&temp_dir, "existing");
    std::fs::create_dir(&target).unwrap();

    // Second creation is a no-op success.
    create_dir(&target, &config).unwrap();
    assert!(std::path::Path::new(&target).is_dir());
}

#[test]
fn test_create_dir_rejects_empty_path() {
    let config = Config::new("demo");

    match create_dir("", &config) {
        Err(SproutError::PathError(_)) => (),
        other => panic!("Expected PathError, got {:?}", other),
    }
}

#[test]
fn test_create_file_happy_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new("demo");
    let target = path_in(&temp_dir, "new_file.txt");

    create_file(&target, &config).unwrap();

    let meta = std::fs::metadata(&target).unwrap();
    assert!(meta.is_file());
    assert_eq!(meta.len(), 0, "created files must be empty");
}

#[test]
fn test_create_file_already_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new("demo");
    let target = path_in(&temp_dir, "existing.txt");
    std::fs::write(&target, "keep me").unwrap();

    create_file(&target, &config).unwrap();

    // Existing content is left untouched.
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "keep me");
}

#[test]
fn test_create_file_rejects_empty_path() {
    let config = Config::new("demo");

    match create_file("", &config) {
        Err(SproutError::PathError(_)) => (),
        other => panic!("Expected PathError, got {:?}", other),
    }
}

#[test]
fn test_create_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new("demo");
    let dir_target = path_in(&temp_dir, "idem_dir");
    let file_target = path_in(&temp_dir, "idem_file");

    create_dir(&dir_target, &config).unwrap();
    create_dir(&dir_target, &config).unwrap();
    create_file(&file_target, &config).unwrap();
    create_file(&file_target, &config).unwrap();

    assert!(std::path::Path::new(&dir_target).is_dir());
    assert!(std::path::Path::new(&file_target).is_file());
}

#[test]
fn test_create_expands_placeholders() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new("demo");
    let target = path_in(&temp_dir, "<main_package>-config");

    create_dir(&target, &config).unwrap();

    assert!(temp_dir.path().join("demo-config").is_dir());
}

#[test]
fn test_traverse_node_builds_tree() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new("demo");

    let mut src = IndexMap::new();
    src.insert("main.go".to_string(), TemplateNode::File);

    let mut root = IndexMap::new();
    root.insert("src".to_string(), TemplateNode::Directory(src));
    root.insert("README.md".to_string(), TemplateNode::File);

    let prefix = format!("{}/", temp_dir.path().display());
    traverse_node(&root, &prefix, &config).unwrap();

    assert!(temp_dir.path().join("src").is_dir());
    assert!(temp_dir.path().join("src/main.go").is_file());
    assert!(temp_dir.path().join("README.md").is_file());
    assert_eq!(
        std::fs::metadata(temp_dir.path().join("src/main.go")).unwrap().len(),
        0
    );
}

#[test]
fn test_traverse_node_creates_parent_before_children() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::new("demo");

    let mut inner = IndexMap::new();
    inner.insert("leaf".to_string(), TemplateNode::File);
    let mut middle = IndexMap::new();
    middle.insert("inner".to_string(), TemplateNode::Directory(inner));
    let mut root = IndexMap::new();
    root.insert("outer".to_string(), TemplateNode::Directory(middle));

    let prefix = format!("{}/", temp_dir.path().display());
    traverse_node(&root, &prefix, &config).unwrap();

    assert!(temp_dir.path().join("outer/inner/leaf").is_file());
}
