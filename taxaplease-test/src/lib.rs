//! Test utilities for the taxaplease workspace
//!
//! Fixture stores (a small NCBI slice plus deliberately broken stores),
//! lineage assertions, and an isolated config environment.

pub mod assertions;
pub mod environment;
pub mod fixtures;

pub use assertions::{assert_lineage_terminates, assert_no_placeholders};
pub use environment::TestEnvironment;
pub use fixtures::{
    cyclic_store, dangling_store, deep_chain_store, ncbi_store, ncbi_taxids, null_name_store, taxa,
};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (call once per test module)
pub fn init_test_logging() {
    taxaplease_core::logging::init_logging("debug");
}
