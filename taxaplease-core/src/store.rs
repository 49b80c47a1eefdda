//! Read-only access to taxonomy records
//!
//! The lineage engine only needs point lookups by taxid. Whatever loads the
//! NCBI dump (SQLite, a memory map, a fixture) implements [`TaxonomyStore`];
//! [`InMemoryStore`] is the hash-map backed implementation used by tests and
//! by callers that already hold the records.

use crate::error::TaxaResult;
use crate::types::{TaxidStatus, TaxonId, TaxonRecord};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

/// Point lookups into a loaded taxonomy
///
/// Implementations must be pure: the same taxid always yields the same
/// record for the lifetime of the store.
pub trait TaxonomyStore {
    /// Fetch the record for `taxid`, or `None` if the store has no such taxid
    fn lookup(&self, taxid: TaxonId) -> Option<TaxonRecord>;

    fn contains(&self, taxid: TaxonId) -> bool {
        self.lookup(taxid).is_some()
    }

    /// Status of a taxid. Stores without deleted/merged tables can only
    /// distinguish current from unknown.
    fn status(&self, taxid: TaxonId) -> TaxidStatus {
        if self.contains(taxid) {
            TaxidStatus::Current
        } else {
            TaxidStatus::Unknown
        }
    }
}

impl<S: TaxonomyStore + ?Sized> TaxonomyStore for &S {
    fn lookup(&self, taxid: TaxonId) -> Option<TaxonRecord> {
        (**self).lookup(taxid)
    }

    fn contains(&self, taxid: TaxonId) -> bool {
        (**self).contains(taxid)
    }

    fn status(&self, taxid: TaxonId) -> TaxidStatus {
        (**self).status(taxid)
    }
}

impl<S: TaxonomyStore + ?Sized> TaxonomyStore for Arc<S> {
    fn lookup(&self, taxid: TaxonId) -> Option<TaxonRecord> {
        (**self).lookup(taxid)
    }

    fn contains(&self, taxid: TaxonId) -> bool {
        (**self).contains(taxid)
    }

    fn status(&self, taxid: TaxonId) -> TaxidStatus {
        (**self).status(taxid)
    }
}

/// A retired taxid and the taxid it now lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedTaxid {
    pub old_taxid: TaxonId,
    pub new_taxid: TaxonId,
}

/// Serialized form of a store: live records plus the retirement tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDump {
    pub taxa: Vec<TaxonRecord>,
    #[serde(default)]
    pub deleted: Vec<TaxonId>,
    #[serde(default)]
    pub merged: Vec<MergedTaxid>,
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    taxa: HashMap<TaxonId, TaxonRecord>,
    deleted: HashSet<TaxonId>,
    merged: HashMap<TaxonId, TaxonId>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = TaxonRecord>,
    {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    pub fn from_dump(dump: StoreDump) -> Self {
        let mut store = Self::from_records(dump.taxa);
        store.deleted.extend(dump.deleted);
        store
            .merged
            .extend(dump.merged.into_iter().map(|m| (m.old_taxid, m.new_taxid)));
        tracing::debug!(
            "Loaded {} taxa ({} deleted, {} merged)",
            store.taxa.len(),
            store.deleted.len(),
            store.merged.len()
        );
        store
    }

    /// Build a store from a JSON [`StoreDump`]
    pub fn from_json(json: &str) -> TaxaResult<Self> {
        Self::from_json_reader(json.as_bytes())
    }

    /// Load a JSON [`StoreDump`] written by the database generator
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> TaxaResult<Self> {
        let file = File::open(path.as_ref())?;
        tracing::debug!("Reading taxonomy dump from {:?}", path.as_ref());
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> TaxaResult<Self> {
        let dump: StoreDump = serde_json::from_reader(reader)?;
        Ok(Self::from_dump(dump))
    }

    pub fn to_dump(&self) -> StoreDump {
        let mut taxa: Vec<TaxonRecord> = self.taxa.values().cloned().collect();
        taxa.sort_by_key(|r| r.taxid);
        let mut deleted: Vec<TaxonId> = self.deleted.iter().copied().collect();
        deleted.sort();
        let mut merged: Vec<MergedTaxid> = self
            .merged
            .iter()
            .map(|(&old_taxid, &new_taxid)| MergedTaxid {
                old_taxid,
                new_taxid,
            })
            .collect();
        merged.sort_by_key(|m| m.old_taxid);
        StoreDump {
            taxa,
            deleted,
            merged,
        }
    }

    /// Insert or replace a record
    pub fn insert(&mut self, record: TaxonRecord) {
        self.taxa.insert(record.taxid, record);
    }

    pub fn mark_deleted(&mut self, taxid: TaxonId) {
        self.deleted.insert(taxid);
    }

    pub fn mark_merged(&mut self, old_taxid: TaxonId, new_taxid: TaxonId) {
        self.merged.insert(old_taxid, new_taxid);
    }

    pub fn get(&self, taxid: TaxonId) -> Option<&TaxonRecord> {
        self.taxa.get(&taxid)
    }

    pub fn len(&self) -> usize {
        self.taxa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaxonRecord> {
        self.taxa.values()
    }
}

impl TaxonomyStore for InMemoryStore {
    fn lookup(&self, taxid: TaxonId) -> Option<TaxonRecord> {
        self.taxa.get(&taxid).cloned()
    }

    fn contains(&self, taxid: TaxonId) -> bool {
        self.taxa.contains_key(&taxid)
    }

    fn status(&self, taxid: TaxonId) -> TaxidStatus {
        if self.taxa.contains_key(&taxid) {
            TaxidStatus::Current
        } else if let Some(&into) = self.merged.get(&taxid) {
            TaxidStatus::Merged { into }
        } else if self.deleted.contains(&taxid) {
            TaxidStatus::Deleted
        } else {
            TaxidStatus::Unknown
        }
    }
}

impl FromIterator<TaxonRecord> for InMemoryStore {
    fn from_iter<I: IntoIterator<Item = TaxonRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
