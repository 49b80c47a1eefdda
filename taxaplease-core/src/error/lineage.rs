//! Error kinds raised by lineage queries

use crate::types::TaxonId;
use thiserror::Error;

/// Failure of a single taxonomy query
///
/// "No match" results (no ancestor at a rank, no Baltimore class) are not
/// errors and are returned as `Ok(None)` by the query methods.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineageError {
    #[error("taxid {0} not found in taxonomy store")]
    TaxonNotFound(TaxonId),

    #[error("lineage of taxid {taxid} exceeded the maximum depth of {max_depth} steps")]
    MaxDepthExceeded { taxid: TaxonId, max_depth: usize },

    #[error("lineage broken at taxid {taxid}: parent {parent} is not in the store")]
    BrokenLineage { taxid: TaxonId, parent: TaxonId },

    #[error("taxids {0:?} share no common root")]
    NoCommonAncestor(Vec<TaxonId>),

    #[error("{operation} needs at least one taxid")]
    EmptyQuery { operation: &'static str },

    #[error("unknown domain '{0}' (expected Archaea, Bacteria, Eukaryota or Virus)")]
    UnknownDomain(String),
}

impl LineageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaxonNotFound(_))
    }

    /// True when the store itself is inconsistent rather than the query
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MaxDepthExceeded { .. }
                | Self::BrokenLineage { .. }
                | Self::NoCommonAncestor(_)
        )
    }
}

pub type LineageResult<T> = Result<T, LineageError>;
