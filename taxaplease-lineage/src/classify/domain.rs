use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use taxaplease_core::{LineageError, TaxonId};

/// Top-level groups a taxid can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Archaea,
    Bacteria,
    Eukaryota,
    Virus,
}

impl Domain {
    pub const ALL: [Domain; 4] = [Self::Archaea, Self::Bacteria, Self::Eukaryota, Self::Virus];

    /// The taxid heading this domain in the NCBI tree
    pub fn anchor(&self) -> TaxonId {
        match self {
            Self::Archaea => TaxonId::ARCHAEA,
            Self::Bacteria => TaxonId::BACTERIA,
            Self::Eukaryota => TaxonId::EUKARYOTA,
            Self::Virus => TaxonId::VIRUSES,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Archaea => "Archaea",
            Self::Bacteria => "Bacteria",
            Self::Eukaryota => "Eukaryota",
            Self::Virus => "Virus",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Domain {
    type Err = LineageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "archaea" | "archaeon" => Ok(Self::Archaea),
            "bacteria" | "bacterium" => Ok(Self::Bacteria),
            "eukaryota" | "eukaryote" | "eukaryotes" => Ok(Self::Eukaryota),
            "virus" | "viruses" => Ok(Self::Virus),
            _ => Err(LineageError::UnknownDomain(s.to_string())),
        }
    }
}
