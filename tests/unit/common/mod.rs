//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing sigparse components.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Install `env_logger` for the test harness (idempotent)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A temporary directory holding parser config files
pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    /// Create an empty config directory
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Get the root path of the config directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file inside the directory (not created)
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a config file and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.file(name);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }
}

impl Default for ConfigDir {
    fn default() -> Self {
        Self::new()
    }
}
