//! End-to-end queries through the `Taxonomy` handle

use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;
use taxaplease_core::config::load_config;
use taxaplease_lineage::{
    BaltimoreClass, BaltimoreTable, Domain, InMemoryStore, PhageTable, TaxonId, Taxonomy,
};
use taxaplease_test::{
    assert_no_placeholders, init_test_logging, ncbi_store, taxa, TestEnvironment,
};

#[test]
fn test_render_two_streptococci() {
    init_test_logging();
    let taxonomy = Taxonomy::new(ncbi_store());

    let text = taxonomy
        .render(&[taxa::S_PNEUMONIAE, taxa::S_HYOINTESTINALIS])
        .unwrap();
    assert_no_placeholders(&text);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "╙── root");
    // shared prefix printed exactly once
    assert_eq!(text.matches("Streptococcus\n").count(), 1);
    assert_eq!(text.matches("Bacteria").count(), 1);
    assert!(lines[9].ends_with("├─╼ Streptococcus pneumoniae"));
    assert!(lines[10].ends_with("└─╼ Streptococcus hyointestinalis"));

    let graph = taxonomy
        .lineage_graph(&[taxa::S_PNEUMONIAE, taxa::S_HYOINTESTINALIS])
        .unwrap();
    let leaves: Vec<TaxonId> = graph.leaves().into_iter().map(|r| r.taxid).collect();
    assert_eq!(leaves, vec![taxa::S_PNEUMONIAE, taxa::S_HYOINTESTINALIS]);
}

#[test]
fn test_render_many_taxa() {
    let taxonomy = Taxonomy::new(ncbi_store());
    let inputs = [
        taxa::E_COLI,
        taxa::CANIS_LUPUS,
        taxa::ALOE_VERA,
        taxa::M_SMITHII,
        taxa::BOWSER,
        taxa::HIV_1,
    ];

    let text = taxonomy.render(&inputs).unwrap();
    assert_no_placeholders(&text);
    assert_eq!(text.matches("╙── ").count(), 1);
    for taxid in inputs {
        let name = taxonomy.record(taxid).unwrap().name.unwrap();
        assert_eq!(text.matches(name.as_str()).count(), 1, "{} drawn once", name);
    }
}

#[test]
fn test_records_serialize_for_callers() {
    let taxonomy = Taxonomy::new(ncbi_store());

    let record = taxonomy.record(taxa::S_HYOINTESTINALIS).unwrap();
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        serde_json::json!({
            "taxid": 1337,
            "name": "Streptococcus hyointestinalis",
            "rank": "species",
            "parent_taxid": 1301
        })
    );

    let distances = taxonomy
        .ancestor_distances(&[taxa::E_COLI, taxa::S_FLEXNERI])
        .unwrap();
    assert_eq!(
        serde_json::to_value(&distances).unwrap(),
        serde_json::json!({
            "common_ancestor": 543,
            "levels": [
                {"taxid": 562, "levels": 2},
                {"taxid": 623, "levels": 2}
            ],
            "total": 4
        })
    );

    let chain = taxonomy.ancestors_of(taxa::ESCHERICHIA).unwrap();
    let json = serde_json::to_value(&chain).unwrap();
    assert_eq!(json.as_array().unwrap().len(), chain.len());
}

#[test]
fn test_common_lookups() {
    let taxonomy = Taxonomy::new(ncbi_store());

    assert_eq!(taxonomy.parent_of(taxa::ROOT).unwrap(), taxa::ROOT);
    assert_eq!(taxonomy.genus_of(taxa::E_COLI).unwrap(), Some(taxa::ESCHERICHIA));
    assert_eq!(
        taxonomy
            .common_ancestor_record(&[taxa::CANIS_LUPUS, taxa::ALOE_VERA])
            .unwrap()
            .display_name(),
        Some("Eukaryota")
    );
    assert_eq!(
        taxonomy
            .common_ancestor_record(&[taxa::E_COLI, taxa::S_FLEXNERI])
            .unwrap()
            .display_name(),
        Some("Enterobacteriaceae")
    );
    assert!(taxonomy.is_domain(TaxonId(2), "Bacteria".parse::<Domain>().unwrap()).unwrap());
    assert!(taxonomy.is_phage(taxa::CAUDOVIRICETES).unwrap());
    assert!(taxonomy.is_phage(taxa::BOWSER).unwrap());
    assert_eq!(
        taxonomy.ancestor_at_rank(taxa::CANIS_LUPUS, "species").unwrap(),
        Some(taxa::CANIS_LUPUS)
    );
    assert_eq!(taxonomy.species_of(taxa::BACTERIA).unwrap(), None);
}

#[test]
fn test_config_file_drives_classification() {
    let env = TestEnvironment::new().unwrap();
    let path = env
        .write_config(
            r#"
[lineage]
max_depth = 64

[classification]
phage_names = ["Orthomyxoviridae"]

[[classification.baltimore]]
taxid = 11308
class = "V"
"#,
        )
        .unwrap();
    let config = load_config(&path).unwrap();
    let taxonomy = Taxonomy::with_config(ncbi_store(), config).unwrap();

    assert_eq!(taxonomy.walker().max_depth(), 64);
    assert!(taxonomy.is_phage(taxa::INFLUENZA_A).unwrap());
    assert!(!taxonomy.is_phage(taxa::BOWSER).unwrap());
    assert_eq!(
        taxonomy.baltimore_classification(taxa::INFLUENZA_A).unwrap(),
        Some(BaltimoreClass::V)
    );
    assert_eq!(taxonomy.baltimore_classification(taxa::HIV_1).unwrap(), None);
}

#[test]
fn test_concurrent_overrides_are_isolated() {
    let store = Arc::new(ncbi_store());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let taxonomy: Taxonomy<Arc<InMemoryStore>> = if i % 2 == 0 {
                    Taxonomy::new(store)
                } else {
                    Taxonomy::new(store)
                        .with_phage_table(
                            PhageTable::new().with_taxon(TaxonId(11632), "Retroviridae"),
                        )
                        .with_baltimore_table(BaltimoreTable::new())
                };
                (
                    i,
                    taxonomy.is_phage(taxa::HIV_1).unwrap(),
                    taxonomy.is_phage(taxa::BOWSER).unwrap(),
                    taxonomy.baltimore_classification(taxa::HIV_1).unwrap(),
                )
            })
        })
        .collect();

    for handle in handles {
        let (i, hiv_phage, bowser_phage, hiv_class) = handle.join().unwrap();
        if i % 2 == 0 {
            assert!(!hiv_phage);
            assert!(bowser_phage);
            assert_eq!(hiv_class, Some(BaltimoreClass::VI));
        } else {
            assert!(hiv_phage);
            assert!(!bowser_phage);
            assert_eq!(hiv_class, None);
        }
    }

    // Defaults are intact afterwards
    let plain = Taxonomy::new(store);
    assert!(!plain.is_phage(taxa::HIV_1).unwrap());
}

#[test]
fn test_most_specific_baltimore_marker_wins() {
    let taxonomy = Taxonomy::new(ncbi_store());

    // Monodnaviria is ssDNA, but Papovaviricetes inside it is dsDNA
    assert_eq!(
        taxonomy.baltimore_classification(taxa::HPV_16).unwrap(),
        Some(BaltimoreClass::I)
    );
    assert_eq!(
        taxonomy.baltimore_classification(taxa::PARVOVIRIDAE).unwrap(),
        Some(BaltimoreClass::II)
    );
    // Pisuviricota is +ssRNA apart from its dsRNA families
    assert_eq!(
        taxonomy.baltimore_classification(taxa::PICOBIRNAVIRIDAE).unwrap(),
        Some(BaltimoreClass::III)
    );
    assert_eq!(
        taxonomy.baltimore_classification(taxa::PICORNAVIRIDAE).unwrap(),
        Some(BaltimoreClass::IV)
    );
}
