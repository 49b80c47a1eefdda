//! Bounded walks from a taxid up to the root

use serde::Serialize;
use taxaplease_core::config::DEFAULT_MAX_DEPTH;
use taxaplease_core::{
    LineageError, LineageResult, TaxonId, TaxonRecord, TaxonomicRank, TaxonomyStore,
};

/// A taxid's own record followed by each ancestor, ending at the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LineageChain {
    records: Vec<TaxonRecord>,
}

impl LineageChain {
    /// The queried record
    pub fn leaf(&self) -> &TaxonRecord {
        &self.records[0]
    }

    pub fn root(&self) -> &TaxonRecord {
        &self.records[self.records.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; a chain holds at least the queried record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TaxonRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaxonRecord> {
        self.records.iter()
    }

    /// Records ordered root first
    pub fn root_first(&self) -> impl DoubleEndedIterator<Item = &TaxonRecord> + ExactSizeIterator {
        self.records.iter().rev()
    }

    pub fn taxids(&self) -> Vec<TaxonId> {
        self.records.iter().map(|r| r.taxid).collect()
    }

    pub fn contains(&self, taxid: TaxonId) -> bool {
        self.records.iter().any(|r| r.taxid == taxid)
    }

    /// Number of parent edges from the leaf up to `taxid`, if it is on the chain
    pub fn edges_to(&self, taxid: TaxonId) -> Option<usize> {
        self.records.iter().position(|r| r.taxid == taxid)
    }

    pub fn into_records(self) -> Vec<TaxonRecord> {
        self.records
    }
}

impl<'c> IntoIterator for &'c LineageChain {
    type Item = &'c TaxonRecord;
    type IntoIter = std::slice::Iter<'c, TaxonRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Walks parent links through a [`TaxonomyStore`]
///
/// Two guards keep every walk finite: an unknown starting taxid fails before
/// any step is taken, and a walk that has not reached a self-parented root
/// after `max_depth` records fails with [`LineageError::MaxDepthExceeded`].
pub struct LineageWalker<'a, S: TaxonomyStore + ?Sized> {
    store: &'a S,
    max_depth: usize,
}

impl<S: TaxonomyStore + ?Sized> Clone for LineageWalker<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: TaxonomyStore + ?Sized> Copy for LineageWalker<'_, S> {}

impl<'a, S: TaxonomyStore + ?Sized> LineageWalker<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Zero is treated as one: the queried record itself always fits.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn store(&self) -> &'a S {
        self.store
    }

    /// Fetch a single record
    pub fn record(&self, taxid: TaxonId) -> LineageResult<TaxonRecord> {
        self.store
            .lookup(taxid)
            .ok_or(LineageError::TaxonNotFound(taxid))
    }

    /// Fail with `TaxonNotFound` for the first taxid the store lacks
    pub fn ensure_all_exist(&self, taxids: &[TaxonId]) -> LineageResult<()> {
        match taxids.iter().find(|&&t| !self.store.contains(t)) {
            Some(&missing) => Err(LineageError::TaxonNotFound(missing)),
            None => Ok(()),
        }
    }

    /// Parent taxid; the root is its own parent
    pub fn parent_of(&self, taxid: TaxonId) -> LineageResult<TaxonId> {
        Ok(self.record(taxid)?.parent_taxid)
    }

    pub fn parent_record(&self, taxid: TaxonId) -> LineageResult<TaxonRecord> {
        let record = self.record(taxid)?;
        if record.is_root() {
            return Ok(record);
        }
        self.store
            .lookup(record.parent_taxid)
            .ok_or(LineageError::BrokenLineage {
                taxid,
                parent: record.parent_taxid,
            })
    }

    pub fn ancestors_of(&self, taxid: TaxonId) -> LineageResult<LineageChain> {
        let mut current = self.record(taxid)?;
        let mut records = Vec::new();

        loop {
            if records.len() >= self.max_depth {
                tracing::debug!(
                    "Lineage walk from {} stopped after {} steps",
                    taxid,
                    self.max_depth
                );
                return Err(LineageError::MaxDepthExceeded {
                    taxid,
                    max_depth: self.max_depth,
                });
            }

            let at_root = current.is_root();
            let (child, parent) = (current.taxid, current.parent_taxid);
            records.push(current);
            if at_root {
                break;
            }

            current = self
                .store
                .lookup(parent)
                .ok_or(LineageError::BrokenLineage {
                    taxid: child,
                    parent,
                })?;
        }

        tracing::trace!("Lineage of {} has {} records", taxid, records.len());
        Ok(LineageChain { records })
    }

    /// Ancestor taxids from most to least specific, optionally starting with
    /// `taxid` itself
    pub fn parent_taxids(
        &self,
        taxid: TaxonId,
        include_self: bool,
    ) -> LineageResult<Vec<TaxonId>> {
        let skip = usize::from(!include_self);
        Ok(self
            .ancestors_of(taxid)?
            .iter()
            .skip(skip)
            .map(|r| r.taxid)
            .collect())
    }

    /// First record on the lineage (the taxid itself included) with `rank`
    pub fn ancestor_at_rank(
        &self,
        taxid: TaxonId,
        rank: &str,
    ) -> LineageResult<Option<TaxonId>> {
        Ok(self
            .ancestors_of(taxid)?
            .iter()
            .find(|r| r.has_rank(rank))
            .map(|r| r.taxid))
    }

    fn first_with_rank(
        &self,
        taxid: TaxonId,
        accept: impl Fn(TaxonomicRank) -> bool,
    ) -> LineageResult<Option<TaxonId>> {
        Ok(self
            .ancestors_of(taxid)?
            .iter()
            .find(|r| r.taxonomic_rank().is_some_and(&accept))
            .map(|r| r.taxid))
    }

    pub fn species_of(&self, taxid: TaxonId) -> LineageResult<Option<TaxonId>> {
        self.first_with_rank(taxid, |rank| rank == TaxonomicRank::Species)
    }

    pub fn genus_of(&self, taxid: TaxonId) -> LineageResult<Option<TaxonId>> {
        self.first_with_rank(taxid, |rank| rank == TaxonomicRank::Genus)
    }

    /// Newer NCBI dumps label the top cellular level `domain`; either counts
    pub fn superkingdom_of(&self, taxid: TaxonId) -> LineageResult<Option<TaxonId>> {
        self.first_with_rank(taxid, |rank| rank.is_top_level())
    }
}
