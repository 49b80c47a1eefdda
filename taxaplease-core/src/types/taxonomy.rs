/// Taxonomy identifier type used throughout taxaplease
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TaxaError;

/// NCBI taxonomy ID - newtype pattern for type safety
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaxonId(pub u32);

impl TaxonId {
    /// Create a new TaxonId
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Check if this is the NCBI root taxon (1)
    pub fn is_root(&self) -> bool {
        *self == Self::ROOT
    }
}

impl fmt::Display for TaxonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TaxonId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<TaxonId> for u32 {
    fn from(taxon: TaxonId) -> Self {
        taxon.0
    }
}

/// Taxids arrive as text from command lines and files; surrounding
/// whitespace is ignored and zero is rejected.
impl FromStr for TaxonId {
    type Err = TaxaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(0) => Err(TaxaError::InvalidInput(
                "taxid must be a positive integer, got 0".to_string(),
            )),
            Ok(id) => Ok(Self(id)),
            Err(e) => Err(TaxaError::InvalidInput(format!(
                "invalid taxid '{}': {}",
                s.trim(),
                e
            ))),
        }
    }
}

// Well-known anchors in the NCBI tree
impl TaxonId {
    pub const ROOT: Self = Self(1);
    pub const BACTERIA: Self = Self(2);
    pub const CELLULAR_ORGANISMS: Self = Self(131567);
    pub const ARCHAEA: Self = Self(2157);
    pub const EUKARYOTA: Self = Self(2759);
    pub const VIRUSES: Self = Self(10239);
}
