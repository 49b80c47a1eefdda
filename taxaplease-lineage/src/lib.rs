//! Lineage queries over a loaded NCBI taxonomy
//!
//! Data flows one way: a [`TaxonomyStore`] feeds the [`LineageWalker`], and
//! the [`AncestorResolver`], [`Classifier`] and [`GraphRenderer`] are all
//! built on the walker. [`Taxonomy`] ties a store and a [`Config`] together
//! and exposes every query in one place.

pub mod classify;
pub mod render;
pub mod resolver;
pub mod taxonomy;
pub mod walker;

// Re-export commonly used types
pub use classify::{BaltimoreTable, ClassificationTables, Classifier, Domain, PhageTable};
pub use render::{GraphRenderer, LineageGraph};
pub use resolver::{AncestorDistances, AncestorResolver, TaxonLevels};
pub use taxonomy::Taxonomy;
pub use walker::{LineageChain, LineageWalker};

pub use taxaplease_core::{
    BaltimoreClass, Config, InMemoryStore, LineageError, LineageResult, TaxidStatus, TaxonId,
    TaxonRecord, TaxonomyStore,
};
