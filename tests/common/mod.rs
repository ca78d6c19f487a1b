// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use std::fs;
use std::path::Path;

use ionbridge::{IntegrationDeps, TaskChain};
use tempfile::TempDir;

/// Create a project directory seeded with the given `ionic.config.json`.
pub fn setup_project(config_json: &str) -> TempDir {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("ionic.config.json"), config_json).unwrap();
    temp
}

/// Create a project directory with no config document.
pub fn empty_project() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Integration dependencies with a silent reporter rooted at `dir`.
pub fn deps_for(dir: &Path) -> IntegrationDeps {
    IntegrationDeps::new(dir.to_path_buf(), TaskChain::silent())
}

/// Lay out a tree of (relative path, contents) files under `root`.
/// Entries ending in `/` create empty directories.
pub fn write_tree(root: &Path, entries: &[(&str, &str)]) {
    for (relative, contents) in entries {
        let path = root.join(relative);
        if relative.ends_with('/') {
            fs::create_dir_all(&path).unwrap();
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }
}
