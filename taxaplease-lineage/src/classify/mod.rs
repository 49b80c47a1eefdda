//! Domain, phage and Baltimore membership of taxids
//!
//! Every check walks the taxid's lineage, so an unknown taxid surfaces as
//! `TaxonNotFound` exactly like any other lookup.

pub mod domain;
pub mod tables;

pub use domain::Domain;
pub use tables::{BaltimoreTable, ClassificationTables, PhageTable};

use crate::walker::LineageWalker;
use std::sync::Arc;
use taxaplease_core::{BaltimoreClass, LineageResult, TaxonId, TaxonomyStore};

pub struct Classifier<'a, S: TaxonomyStore + ?Sized> {
    walker: LineageWalker<'a, S>,
    tables: ClassificationTables,
}

impl<'a, S: TaxonomyStore + ?Sized> Classifier<'a, S> {
    /// Classifier using the built-in tables
    pub fn new(walker: LineageWalker<'a, S>) -> Self {
        Self::with_tables(walker, ClassificationTables::default())
    }

    pub fn with_tables(walker: LineageWalker<'a, S>, tables: ClassificationTables) -> Self {
        Self { walker, tables }
    }

    /// Replace the phage table for this classifier only
    pub fn with_phage_table(mut self, table: impl Into<Arc<PhageTable>>) -> Self {
        self.tables = self.tables.with_phages(table);
        self
    }

    /// Replace the Baltimore table for this classifier only
    pub fn with_baltimore_table(mut self, table: impl Into<Arc<BaltimoreTable>>) -> Self {
        self.tables = self.tables.with_baltimore(table);
        self
    }

    pub fn tables(&self) -> &ClassificationTables {
        &self.tables
    }

    /// True when `taxid` is the domain's anchor or descends from it
    pub fn is_domain(&self, taxid: TaxonId, domain: Domain) -> LineageResult<bool> {
        let anchor = domain.anchor();
        let chain = self.walker.ancestors_of(taxid)?;
        Ok(taxid == anchor || chain.contains(anchor))
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

    /// The domain a taxid belongs to, if any
    pub fn domain_of(&self, taxid: TaxonId) -> LineageResult<Option<Domain>> {
        let chain = self.walker.ancestors_of(taxid)?;
        Ok(Domain::ALL
            .into_iter()
            .find(|d| chain.contains(d.anchor())))
    }

    pub fn is_phage(&self, taxid: TaxonId) -> LineageResult<bool> {
        self.is_phage_with(taxid, &self.tables.phages)
    }

    /// Phage check against a caller-supplied table
    pub fn is_phage_with(&self, taxid: TaxonId, table: &PhageTable) -> LineageResult<bool> {
        let chain = self.walker.ancestors_of(taxid)?;
        Ok(chain.iter().any(|record| table.matches(record)))
    }

    pub fn baltimore_classification(
        &self,
        taxid: TaxonId,
    ) -> LineageResult<Option<BaltimoreClass>> {
        self.baltimore_classification_with(taxid, &self.tables.baltimore)
    }

    /// Baltimore class from the most specific marker on the lineage;
    /// `None` for non-viruses and viruses with no marker
    pub fn baltimore_classification_with(
        &self,
        taxid: TaxonId,
        table: &BaltimoreTable,
    ) -> LineageResult<Option<BaltimoreClass>> {
        let chain = self.walker.ancestors_of(taxid)?;
        if !chain.contains(Domain::Virus.anchor()) {
            return Ok(None);
        }
        Ok(chain.iter().find_map(|record| table.class_of(record.taxid)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use taxaplease_core::InMemoryStore;
    use taxaplease_test::{ncbi_store, taxa};

    fn classifier(store: &InMemoryStore) -> Classifier<'_, InMemoryStore> {
        Classifier::new(LineageWalker::new(store))
    }

    #[rstest]
    #[case(Domain::Bacteria)]
    #[case(Domain::Archaea)]
    #[case(Domain::Eukaryota)]
    #[case(Domain::Virus)]
    fn test_anchor_classifies_as_its_own_domain(#[case] domain: Domain) {
        let store = ncbi_store();
        assert!(classifier(&store).is_domain(domain.anchor(), domain).unwrap());
    }

    #[test]
    fn test_domain_membership() {
        let store = ncbi_store();
        let c = classifier(&store);

        assert!(c.is_bacteria(taxa::E_COLI).unwrap());
        assert!(!c.is_archaea(taxa::S_FLEXNERI).unwrap());
        assert!(c.is_archaea(taxa::M_SMITHII).unwrap());
        assert!(c.is_eukaryote(taxa::ALOE_VERA).unwrap());
        assert!(!c.is_virus(taxa::ALOE_VERA).unwrap());
        assert!(c.is_virus(taxa::BOWSER).unwrap());
        assert!(!c.is_bacteria(taxa::ROOT).unwrap());
    }

    #[test]
    fn test_domain_of() {
        let store = ncbi_store();
        let c = classifier(&store);
        assert_eq!(c.domain_of(taxa::CANIS_LUPUS).unwrap(), Some(Domain::Eukaryota));
        assert_eq!(c.domain_of(taxa::HIV_1).unwrap(), Some(Domain::Virus));
        assert_eq!(c.domain_of(taxa::CELLULAR_ORGANISMS).unwrap(), None);
    }

    #[test]
    fn test_unknown_taxid_is_not_found() {
        let store = ncbi_store();
        let c = classifier(&store);
        assert!(c.is_domain(taxa::MISSING, Domain::Bacteria).unwrap_err().is_not_found());
        assert!(c.is_phage(taxa::MISSING).unwrap_err().is_not_found());
        assert!(c.baltimore_classification(taxa::MISSING).unwrap_err().is_not_found());
    }

    #[test]
    fn test_phages() {
        let store = ncbi_store();
        let c = classifier(&store);
        assert!(c.is_phage(taxa::CAUDOVIRICETES).unwrap());
        assert!(c.is_phage(taxa::BOWSER).unwrap());
        assert!(!c.is_phage(taxa::INFLUENZA_A).unwrap());
        assert!(!c.is_phage(taxa::E_COLI).unwrap());
    }

    #[test]
    fn test_phage_override_is_per_instance() {
        let store = ncbi_store();
        let custom = PhageTable::new().with_name("Retroviridae");
        let overridden = classifier(&store).with_phage_table(custom.clone());
        let default = classifier(&store);

        assert!(overridden.is_phage(taxa::HIV_1).unwrap());
        assert!(!overridden.is_phage(taxa::BOWSER).unwrap());
        assert!(!default.is_phage(taxa::HIV_1).unwrap());
        assert!(default.is_phage(taxa::BOWSER).unwrap());
        // Per-call override leaves the instance table alone
        assert!(default.is_phage_with(taxa::HIV_1, &custom).unwrap());
        assert!(!default.is_phage(taxa::HIV_1).unwrap());
    }

    #[rstest]
    #[case(taxa::BOWSER, Some(BaltimoreClass::I))]
    #[case(taxa::INFLUENZA_A, Some(BaltimoreClass::V))]
    #[case(taxa::HIV_1, Some(BaltimoreClass::VI))]
    #[case(taxa::HEPATITIS_B, Some(BaltimoreClass::VII))]
    #[case(taxa::HPV_16, Some(BaltimoreClass::I))]
    #[case(taxa::POLYOMAVIRIDAE, Some(BaltimoreClass::I))]
    #[case(taxa::PARVOVIRIDAE, Some(BaltimoreClass::II))]
    #[case(taxa::PICOBIRNAVIRIDAE, Some(BaltimoreClass::III))]
    #[case(taxa::PARTITIVIRIDAE, Some(BaltimoreClass::III))]
    #[case(taxa::PICORNAVIRIDAE, Some(BaltimoreClass::IV))]
    #[case(taxa::UNCULTURED_MARINE_VIRUS, None)]
    #[case(taxa::VIRUSES, None)]
    #[case(taxa::E_COLI, None)]
    fn test_baltimore_classification(
        #[case] taxid: TaxonId,
        #[case] expected: Option<BaltimoreClass>,
    ) {
        let store = ncbi_store();
        assert_eq!(classifier(&store).baltimore_classification(taxid).unwrap(), expected);
    }

    #[test]
    fn test_baltimore_override() {
        let store = ncbi_store();
        let table = BaltimoreTable::new().with_marker(taxa::VIRUSES, BaltimoreClass::III);
        let c = classifier(&store).with_baltimore_table(table);

        assert_eq!(
            c.baltimore_classification(taxa::HIV_1).unwrap(),
            Some(BaltimoreClass::III)
        );
        // Non-viruses never get a class, whatever the table says
        let all = BaltimoreTable::new().with_marker(taxa::ROOT, BaltimoreClass::I);
        assert_eq!(c.baltimore_classification_with(taxa::E_COLI, &all).unwrap(), None);
        assert_eq!(
            classifier(&store).baltimore_classification(taxa::HIV_1).unwrap(),
            Some(BaltimoreClass::VI)
        );
    }
}
