//! Static lookup tables behind phage and Baltimore classification
//!
//! The built-in tables are created once per process and shared through
//! `Arc`. Replacement tables are plain values handed to a classifier; they
//! never touch the shared defaults.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, OnceLock};
use taxaplease_core::config::ClassificationConfig;
use taxaplease_core::{BaltimoreClass, TaxonId, TaxonRecord};

static BUILTIN_PHAGES: OnceLock<Arc<PhageTable>> = OnceLock::new();
static BUILTIN_BALTIMORE: OnceLock<Arc<BaltimoreTable>> = OnceLock::new();

/// Bacteriophage lineages recognised out of the box
const DEFAULT_PHAGES: &[(u32, &str)] = &[
    (2731619, "Caudoviricetes"),
    (10860, "Inoviridae"),
    (10841, "Microviridae"),
    (10656, "Tectiviridae"),
    (10659, "Corticoviridae"),
    (10877, "Cystoviridae"),
    (2842243, "Leviviricetes"),
];

/// Lineage markers for each Baltimore class. Classes and families listed
/// here sit below the phyla and realms, so the most specific marker on a
/// lineage decides the class.
const DEFAULT_BALTIMORE: &[(u32, BaltimoreClass)] = &[
    // realms
    (2731341, BaltimoreClass::I),   // Duplodnaviria
    (2732004, BaltimoreClass::I),   // Varidnaviria
    (2840022, BaltimoreClass::I),   // Adnaviria
    (2731342, BaltimoreClass::II),  // Monodnaviria
    // Riboviria phyla
    (2732405, BaltimoreClass::III), // Duplornaviricota
    (2732406, BaltimoreClass::IV),  // Kitrinoviricota
    (2732407, BaltimoreClass::IV),  // Lenarviricota
    (2732408, BaltimoreClass::IV),  // Pisuviricota
    (2497569, BaltimoreClass::V),   // Negarnaviricota
    // dsDNA viruses inside Monodnaviria
    (2732421, BaltimoreClass::I),   // Papovaviricetes
    // dsRNA families inside Pisuviricota
    (585893, BaltimoreClass::III),  // Picobirnaviridae
    (11012, BaltimoreClass::III),   // Partitiviridae
    // reverse-transcribing families
    (11632, BaltimoreClass::VI),    // Retroviridae
    (10404, BaltimoreClass::VII),   // Hepadnaviridae
    (186534, BaltimoreClass::VII),  // Caulimoviridae
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhageTable {
    taxa: BTreeMap<TaxonId, String>,
    names: BTreeSet<String>,
}

impl PhageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide default table
    pub fn builtin() -> Arc<PhageTable> {
        BUILTIN_PHAGES
            .get_or_init(|| {
                let table = DEFAULT_PHAGES
                    .iter()
                    .fold(PhageTable::new(), |t, &(id, name)| t.with_taxon(TaxonId(id), name));
                Arc::new(table)
            })
            .clone()
    }

    /// Table described by a config, or `None` when the config keeps the default
    pub fn from_config(config: &ClassificationConfig) -> Option<Self> {
        if config.phages.is_empty() && config.phage_names.is_empty() {
            return None;
        }
        let mut table = PhageTable::new();
        for entry in &config.phages {
            let label = entry.name.clone().unwrap_or_else(|| entry.taxid.to_string());
            table.taxa.insert(entry.taxid, label);
        }
        table.names.extend(config.phage_names.iter().cloned());
        Some(table)
    }

    pub fn with_taxon(mut self, taxid: TaxonId, label: impl Into<String>) -> Self {
        self.taxa.insert(taxid, label.into());
        self
    }

    /// Match any lineage member whose scientific name is `name`
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    pub fn matches(&self, record: &TaxonRecord) -> bool {
        self.taxa.contains_key(&record.taxid)
            || record
                .display_name()
                .is_some_and(|name| self.names.contains(name))
    }

    pub fn len(&self) -> usize {
        self.taxa.len() + self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty() && self.names.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BaltimoreTable {
    markers: HashMap<TaxonId, BaltimoreClass>,
}

impl BaltimoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide default table
    pub fn builtin() -> Arc<BaltimoreTable> {
        BUILTIN_BALTIMORE
            .get_or_init(|| {
                let table = DEFAULT_BALTIMORE
                    .iter()
                    .fold(BaltimoreTable::new(), |t, &(id, class)| {
                        t.with_marker(TaxonId(id), class)
                    });
                Arc::new(table)
            })
            .clone()
    }

    pub fn from_config(config: &ClassificationConfig) -> Option<Self> {
        if config.baltimore.is_empty() {
            return None;
        }
        Some(
            config
                .baltimore
                .iter()
                .fold(BaltimoreTable::new(), |t, e| t.with_marker(e.taxid, e.class)),
        )
    }

    pub fn with_marker(mut self, taxid: TaxonId, class: BaltimoreClass) -> Self {
        self.markers.insert(taxid, class);
        self
    }

    pub fn class_of(&self, taxid: TaxonId) -> Option<BaltimoreClass> {
        self.markers.get(&taxid).copied()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// The phage and Baltimore tables a classifier consults
#[derive(Debug, Clone)]
pub struct ClassificationTables {
    pub phages: Arc<PhageTable>,
    pub baltimore: Arc<BaltimoreTable>,
}

impl Default for ClassificationTables {
    fn default() -> Self {
        Self {
            phages: PhageTable::builtin(),
            baltimore: BaltimoreTable::builtin(),
        }
    }
}

impl ClassificationTables {
    /// Built-in tables, with any table the config lists swapped in
    pub fn from_config(config: &ClassificationConfig) -> Self {
        let mut tables = Self::default();
        if let Some(phages) = PhageTable::from_config(config) {
            tracing::debug!("Using {} configured phage entries", phages.len());
            tables.phages = Arc::new(phages);
        }
        if let Some(baltimore) = BaltimoreTable::from_config(config) {
            tracing::debug!("Using {} configured Baltimore markers", baltimore.len());
            tables.baltimore = Arc::new(baltimore);
        }
        tables
    }

    pub fn with_phages(mut self, phages: impl Into<Arc<PhageTable>>) -> Self {
        self.phages = phages.into();
        self
    }

    pub fn with_baltimore(mut self, baltimore: impl Into<Arc<BaltimoreTable>>) -> Self {
        self.baltimore = baltimore.into();
        self
    }
}
