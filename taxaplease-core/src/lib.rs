//! Core utilities and types shared across all taxaplease crates

pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, load_or_default, save_config, Config};
pub use error::{LineageError, LineageResult, TaxaError, TaxaResult};
pub use store::{InMemoryStore, TaxonomyStore};

pub use types::{BaltimoreClass, TaxidStatus, TaxonId, TaxonRecord, TaxonomicRank};

pub use system::{config_path, taxaplease_home};

/// Version information for the taxaplease project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
