//! Common test utilities for brewmatch integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory with its own cache, used as the working directory
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Cache directory handed to the binary through `BREWMATCH_CACHE_DIR`
    pub fn cache_dir(&self) -> PathBuf {
        self.path.join("cache")
    }

    /// Copy the fixture catalog into the workspace and return its path
    #[allow(dead_code)]
    pub fn catalog(&self) -> PathBuf {
        let target = self.path.join("cask.json");
        std::fs::copy(fixture("cask.json"), &target).expect("Failed to copy fixture catalog");
        target
    }

    /// Seed the offline snapshot with the fixture catalog
    #[allow(dead_code)]
    pub fn seed_snapshot(&self) -> PathBuf {
        let dir = self.cache_dir();
        std::fs::create_dir_all(&dir).expect("Failed to create cache directory");
        let target = dir.join("cask.json");
        std::fs::copy(fixture("cask.json"), &target).expect("Failed to seed snapshot");
        target
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to a file under `tests/fixtures`
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The real brewmatch binary, isolated from the caller's environment
#[allow(deprecated)]
pub fn brewmatch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("brewmatch").expect("Failed to find brewmatch binary");
    cmd.env_remove("BREWMATCH_CONFIG")
        .env_remove("BREWMATCH_CATALOG_URL")
        .env_remove("BREWMATCH_CACHE_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Binary running inside `workspace` with its cache redirected there
#[allow(dead_code)]
pub fn brewmatch_cmd_for_workspace(workspace: &TestWorkspace) -> Command {
    let mut cmd = brewmatch_cmd();
    cmd.current_dir(&workspace.path)
        .env("BREWMATCH_CACHE_DIR", workspace.cache_dir());
    cmd
}

/// Binary resolving against the fixture catalog copied into `workspace`
#[allow(dead_code)]
pub fn brewmatch_cmd_with_catalog(workspace: &TestWorkspace) -> Command {
    let catalog = workspace.catalog();
    let mut cmd = brewmatch_cmd_for_workspace(workspace);
    cmd.arg("--catalog").arg(path_arg(&catalog));
    cmd
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_catalog_copy() {
        let workspace = TestWorkspace::new();
        let catalog = workspace.catalog();
        assert!(catalog.is_file());
        assert!(workspace.read_file("cask.json").contains("\"signal\""));
    }

    #[test]
    fn test_workspace_seed_snapshot() {
        let workspace = TestWorkspace::new();
        let snapshot = workspace.seed_snapshot();
        assert!(snapshot.starts_with(workspace.cache_dir()));
    }
}
