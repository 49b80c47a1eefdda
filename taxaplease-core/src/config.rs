//! Configuration types for taxaplease

use crate::system::config_path;
use crate::types::{BaltimoreClass, TaxonId};
use crate::TaxaError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Step bound for lineage walks. Real NCBI lineages stay well under 64.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub lineage: LineageConfig,
    #[serde(default)]
    pub classification: ClassificationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineageConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

/// Replacement classification tables
///
/// An empty list keeps the built-in table; a non-empty one replaces it for
/// every taxonomy built from this config.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClassificationConfig {
    #[serde(default)]
    pub phages: Vec<PhageEntry>,
    /// Lineage names that mark a phage regardless of taxid
    #[serde(default)]
    pub phage_names: Vec<String>,
    #[serde(default)]
    pub baltimore: Vec<BaltimoreEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhageEntry {
    pub taxid: TaxonId,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BaltimoreEntry {
    pub taxid: TaxonId,
    pub class: BaltimoreClass,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for LineageConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl Config {
    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<(), TaxaError> {
        if self.lineage.max_depth == 0 {
            return Err(TaxaError::Configuration(
                "lineage.max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, TaxaError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), TaxaError> {
    let contents = toml::to_string_pretty(config)?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Load the user config file if there is one, otherwise the defaults
pub fn load_or_default() -> Result<Config, TaxaError> {
    let path = config_path();
    if path.is_file() {
        tracing::debug!("Loading config from {:?}", path);
        load_config(&path)
    } else {
        Ok(default_config())
    }
}
