//! One handle over a loaded store and its configuration

use crate::classify::{BaltimoreTable, ClassificationTables, Classifier, Domain, PhageTable};
use crate::render::{GraphRenderer, LineageGraph};
use crate::resolver::{AncestorDistances, AncestorResolver};
use crate::walker::{LineageChain, LineageWalker};
use std::sync::Arc;
use taxaplease_core::{
    BaltimoreClass, Config, LineageResult, TaxaResult, TaxidStatus, TaxonId, TaxonRecord,
    TaxonomyStore,
};

/// A read-only taxonomy with its lineage components
///
/// Queries never mutate anything, so a `Taxonomy` can be shared between
/// threads whenever the store can. Classification overrides are bound to
/// this instance and leave the process-wide defaults alone.
///
/// ```
/// use taxaplease_core::{InMemoryStore, TaxonId, TaxonRecord};
/// use taxaplease_lineage::Taxonomy;
///
/// let store = InMemoryStore::from_records([
///     TaxonRecord::new(1u32, "root", "no rank", 1u32),
///     TaxonRecord::new(2u32, "Bacteria", "superkingdom", 1u32),
///     TaxonRecord::new(561u32, "Escherichia", "genus", 2u32),
///     TaxonRecord::new(562u32, "Escherichia coli", "species", 561u32),
/// ]);
/// let taxonomy = Taxonomy::new(store);
///
/// assert_eq!(taxonomy.genus_of(TaxonId(562)).unwrap(), Some(TaxonId(561)));
/// assert!(taxonomy.is_bacteria(TaxonId(2)).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Taxonomy<S> {
    store: S,
    config: Config,
    tables: ClassificationTables,
}

impl<S: TaxonomyStore> Taxonomy<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: Config::default(),
            tables: ClassificationTables::default(),
        }
    }

    pub fn with_config(store: S, config: Config) -> TaxaResult<Self> {
        config.validate()?;
        let tables = ClassificationTables::from_config(&config.classification);
        Ok(Self {
            store,
            config,
            tables,
        })
    }

    pub fn with_phage_table(mut self, table: impl Into<Arc<PhageTable>>) -> Self {
        self.tables = self.tables.with_phages(table);
        self
    }

    pub fn with_baltimore_table(mut self, table: impl Into<Arc<BaltimoreTable>>) -> Self {
        self.tables = self.tables.with_baltimore(table);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn walker(&self) -> LineageWalker<'_, S> {
        LineageWalker::new(&self.store).with_max_depth(self.config.lineage.max_depth)
    }

    pub fn resolver(&self) -> AncestorResolver<'_, S> {
        AncestorResolver::new(self.walker())
    }

    pub fn classifier(&self) -> Classifier<'_, S> {
        Classifier::with_tables(self.walker(), self.tables.clone())
    }

    pub fn renderer(&self) -> GraphRenderer<'_, S> {
        GraphRenderer::new(self.walker())
    }

    pub fn record(&self, taxid: TaxonId) -> LineageResult<TaxonRecord> {
        self.walker().record(taxid)
    }

    pub fn parent_of(&self, taxid: TaxonId) -> LineageResult<TaxonId> {
        self.walker().parent_of(taxid)
    }

    pub fn parent_record(&self, taxid: TaxonId) -> LineageResult<TaxonRecord> {
        self.walker().parent_record(taxid)
    }

    pub fn ancestors_of(&self, taxid: TaxonId) -> LineageResult<LineageChain> {
        self.walker().ancestors_of(taxid)
    }

    pub fn parent_taxids(&self, taxid: TaxonId, include_self: bool) -> LineageResult<Vec<TaxonId>> {
        self.walker().parent_taxids(taxid, include_self)
    }

    pub fn ancestor_at_rank(&self, taxid: TaxonId, rank: &str) -> LineageResult<Option<TaxonId>> {
        self.walker().ancestor_at_rank(taxid, rank)
    }

    pub fn species_of(&self, taxid: TaxonId) -> LineageResult<Option<TaxonId>> {
        self.walker().species_of(taxid)
    }

    pub fn genus_of(&self, taxid: TaxonId) -> LineageResult<Option<TaxonId>> {
        self.walker().genus_of(taxid)
    }

    pub fn superkingdom_of(&self, taxid: TaxonId) -> LineageResult<Option<TaxonId>> {
        self.walker().superkingdom_of(taxid)
    }

    pub fn common_ancestor(&self, taxids: &[TaxonId]) -> LineageResult<TaxonId> {
        self.resolver().common_ancestor(taxids)
    }

    pub fn common_ancestor_record(&self, taxids: &[TaxonId]) -> LineageResult<TaxonRecord> {
        self.resolver().common_ancestor_record(taxids)
    }

    pub fn rank_distance(&self, taxids: &[TaxonId]) -> LineageResult<usize> {
        self.resolver().rank_distance(taxids)
    }

    pub fn ancestor_distances(&self, taxids: &[TaxonId]) -> LineageResult<AncestorDistances> {
        self.resolver().ancestor_distances(taxids)
    }

    pub fn is_domain(&self, taxid: TaxonId, domain: Domain) -> LineageResult<bool> {
        self.classifier().is_domain(taxid, domain)
    }

    pub fn is_archaea(&self, taxid: TaxonId) -> LineageResult<bool> {
        self.is_domain(taxid, Domain::Archaea)
    }

    pub fn is_bacteria(&self, taxid: TaxonId) -> LineageResult<bool> {
        self.is_domain(taxid, Domain::Bacteria)
    }

    pub fn is_eukaryote(&self, taxid: TaxonId) -> LineageResult<bool> {
        self.is_domain(taxid, Domain::Eukaryota)
    }

    pub fn is_virus(&self, taxid: TaxonId) -> LineageResult<bool> {
        self.is_domain(taxid, Domain::Virus)
    }

    pub fn is_phage(&self, taxid: TaxonId) -> LineageResult<bool> {
        self.classifier().is_phage(taxid)
    }

    pub fn baltimore_classification(
        &self,
        taxid: TaxonId,
    ) -> LineageResult<Option<BaltimoreClass>> {
        self.classifier().baltimore_classification(taxid)
    }

    pub fn lineage_graph(&self, taxids: &[TaxonId]) -> LineageResult<LineageGraph> {
        self.renderer().lineage_graph(taxids)
    }

    pub fn render(&self, taxids: &[TaxonId]) -> LineageResult<String> {
        self.renderer().render(taxids)
    }

    /// Whether `taxid` is current, deleted, merged, or unknown to the store
    pub fn taxid_status(&self, taxid: TaxonId) -> TaxidStatus {
        self.store.status(taxid)
    }
}
