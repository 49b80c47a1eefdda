//! Core error types for taxaplease

pub mod lineage;

use thiserror::Error;
pub use lineage::{LineageError, LineageResult};

/// Main error type for taxaplease operations
#[derive(Error, Debug)]
pub enum TaxaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Lineage error: {0}")]
    Lineage(#[from] LineageError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for taxaplease operations
pub type TaxaResult<T> = Result<T, TaxaError>;

impl From<serde_json::Error> for TaxaError {
    fn from(err: serde_json::Error) -> Self {
        TaxaError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for TaxaError {
    fn from(err: toml::de::Error) -> Self {
        TaxaError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for TaxaError {
    fn from(err: toml::ser::Error) -> Self {
        TaxaError::Configuration(format!("Failed to serialize config: {}", err))
    }
}
