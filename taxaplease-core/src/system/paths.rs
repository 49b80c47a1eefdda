use std::path::PathBuf;
use std::sync::OnceLock;

// Cache the paths to avoid repeated environment lookups
static TAXAPLEASE_HOME: OnceLock<PathBuf> = OnceLock::new();
static TAXAPLEASE_CONFIG: OnceLock<PathBuf> = OnceLock::new();

/// Get the taxaplease home directory
/// Checks TAXAPLEASE_HOME environment variable, falls back to ${HOME}/.taxaplease
pub fn taxaplease_home() -> PathBuf {
    TAXAPLEASE_HOME
        .get_or_init(|| {
            if let Ok(path) = std::env::var("TAXAPLEASE_HOME") {
                PathBuf::from(path)
            } else {
                let home = std::env::var("HOME").unwrap_or_else(|_| {
                    std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
                });
                PathBuf::from(home).join(".taxaplease")
            }
        })
        .clone()
}

/// Get the configuration file path
/// Checks TAXAPLEASE_CONFIG environment variable, falls back to TAXAPLEASE_HOME/config.toml
pub fn config_path() -> PathBuf {
    TAXAPLEASE_CONFIG
        .get_or_init(|| {
            if let Ok(path) = std::env::var("TAXAPLEASE_CONFIG") {
                PathBuf::from(path)
            } else {
                taxaplease_home().join("config.toml")
            }
        })
        .clone()
}
