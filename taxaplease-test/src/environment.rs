//! Isolated directories for configuration tests

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway taxaplease home directory, removed on drop
pub struct TestEnvironment {
    root: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            root: tempfile::tempdir()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("config.toml")
    }

    /// Write a config file into the environment and return its path
    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.config_path();
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
