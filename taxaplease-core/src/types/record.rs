use super::{TaxonId, TaxonomicRank};
use serde::{Deserialize, Serialize};

/// Placeholder tokens that older taxonomy exports wrote for missing values
const NULL_TOKENS: &[&str] = &["null", "none", "nan"];

/// A single node of the NCBI taxonomy as held by a store
///
/// The root is the one record whose `parent_taxid` equals its own `taxid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonRecord {
    pub taxid: TaxonId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    pub parent_taxid: TaxonId,
}

impl TaxonRecord {
    pub fn new(
        taxid: impl Into<TaxonId>,
        name: impl Into<String>,
        rank: impl Into<String>,
        parent_taxid: impl Into<TaxonId>,
    ) -> Self {
        Self {
            taxid: taxid.into(),
            name: Some(name.into()),
            rank: Some(rank.into()),
            parent_taxid: parent_taxid.into(),
        }
    }

    /// Whether this record terminates a lineage walk
    pub fn is_root(&self) -> bool {
        self.parent_taxid == self.taxid
    }

    /// The scientific name, or `None` when it is missing or a null placeholder
    pub fn display_name(&self) -> Option<&str> {
        present(self.name.as_deref())
    }

    /// The rank label, or `None` when it is missing or a null placeholder
    pub fn display_rank(&self) -> Option<&str> {
        present(self.rank.as_deref())
    }

    /// Records lacking a usable name or rank are left out of rendered output
    pub fn is_printable(&self) -> bool {
        self.display_name().is_some() && self.display_rank().is_some()
    }

    pub fn has_rank(&self, rank: &str) -> bool {
        self.display_rank()
            .is_some_and(|r| r.eq_ignore_ascii_case(rank.trim()))
    }

    /// The rank as a [`TaxonomicRank`], when it is one the enum names
    pub fn taxonomic_rank(&self) -> Option<TaxonomicRank> {
        self.display_rank().and_then(TaxonomicRank::from_ncbi)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    let value = value?.trim();
    if value.is_empty() || NULL_TOKENS.iter().any(|t| value.eq_ignore_ascii_case(t)) {
        None
    } else {
        Some(value)
    }
}

/// Whether a taxid is live, retired, or folded into another taxid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TaxidStatus {
    Current,
    Deleted,
    Merged { into: TaxonId },
    Unknown,
}

impl TaxidStatus {
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Current)
    }
}
