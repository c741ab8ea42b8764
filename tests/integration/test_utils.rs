//! Shared fixtures for integration tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory populated with the given
/// (relative path, content) entries. Parent directories are created
/// as needed; an entry ending in `/` creates an empty directory.
pub fn fixture_tree(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    populate(temp_dir.path(), files);
    temp_dir
}

pub fn populate(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        if let Some(dir) = rel.strip_suffix('/') {
            fs::create_dir_all(root.join(dir)).expect("failed to create dir");
            continue;
        }
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        fs::write(&path, content).expect("failed to write fixture file");
    }
}
