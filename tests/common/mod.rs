//! Shared testing utilities for promptcard CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated `$HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// `$HOME/.config/promptcard`.
    pub fn config_dir(&self) -> PathBuf {
        self.home().join(".config").join("promptcard")
    }

    /// Build a command for invoking the compiled `promptcard` binary.
    ///
    /// Variables that influence catalog or theme resolution are cleared.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("promptcard").expect("Failed to locate promptcard binary");
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env_remove("PROMPTCARD_CATALOG")
            .env_remove("COLORFGBG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `$HOME/.config/promptcard/catalog.toml`.
    pub fn write_user_catalog(&self, content: &str) -> PathBuf {
        let path = self.config_dir().join("catalog.toml");
        fs::create_dir_all(self.config_dir()).expect("Failed to create config dir");
        fs::write(&path, content).expect("Failed to write catalog");
        path
    }

    /// Write a catalog file outside the config directory.
    pub fn write_catalog_at(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home().join(name);
        fs::write(&path, content).expect("Failed to write catalog");
        path
    }

    /// Contents of the preference file, if any.
    pub fn read_preferences(&self) -> Option<String> {
        fs::read_to_string(self.config_dir().join("preferences.toml")).ok()
    }
}
