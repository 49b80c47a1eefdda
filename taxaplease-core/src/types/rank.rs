use serde::{Deserialize, Serialize};
use std::fmt;

/// The NCBI ranks lineage shortcuts look for
///
/// NCBI stores ranks as free text. Labels other than these have no variant
/// and are matched by their raw string instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomicRank {
    Superkingdom,
    Domain,
    Genus,
    Species,
}

impl TaxonomicRank {
    /// Parse rank from NCBI taxonomy string
    pub fn from_ncbi(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "superkingdom" => Some(Self::Superkingdom),
            "domain" => Some(Self::Domain),
            "genus" => Some(Self::Genus),
            "species" => Some(Self::Species),
            _ => None,
        }
    }

    /// The rank label exactly as NCBI writes it in nodes.dmp
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superkingdom => "superkingdom",
            Self::Domain => "domain",
            Self::Genus => "genus",
            Self::Species => "species",
        }
    }

    /// Top level of the cellular tree; NCBI renamed superkingdom to domain
    pub fn is_top_level(&self) -> bool {
        matches!(self, Self::Superkingdom | Self::Domain)
    }
}

impl fmt::Display for TaxonomicRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
