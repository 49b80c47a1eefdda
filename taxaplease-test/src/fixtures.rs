//! Test fixtures and malformed stores
//!
//! The NCBI slice below keeps real taxids and names for the organisms the
//! tests talk about, with some intermediate ranks collapsed.

use taxaplease_core::{InMemoryStore, TaxonId, TaxonRecord};

/// Taxids present in [`ncbi_store`]
pub mod taxa {
    use taxaplease_core::TaxonId;

    pub const ROOT: TaxonId = TaxonId(1);
    pub const CELLULAR_ORGANISMS: TaxonId = TaxonId(131567);

    pub const BACTERIA: TaxonId = TaxonId(2);
    pub const ENTEROBACTERIACEAE: TaxonId = TaxonId(543);
    pub const ESCHERICHIA: TaxonId = TaxonId(561);
    pub const E_COLI: TaxonId = TaxonId(562);
    pub const E_COLI_K12: TaxonId = TaxonId(83333);
    pub const SHIGELLA: TaxonId = TaxonId(620);
    pub const S_FLEXNERI: TaxonId = TaxonId(623);
    pub const STREPTOCOCCUS: TaxonId = TaxonId(1301);
    pub const S_PNEUMONIAE: TaxonId = TaxonId(1313);
    pub const S_HYOINTESTINALIS: TaxonId = TaxonId(1337);
    pub const STREPTOSPORANGIUM: TaxonId = TaxonId(2000);

    pub const ARCHAEA: TaxonId = TaxonId(2157);
    pub const M_SMITHII: TaxonId = TaxonId(2173);

    pub const EUKARYOTA: TaxonId = TaxonId(2759);
    pub const CANIS_LUPUS: TaxonId = TaxonId(9612);
    pub const ALOE_VERA: TaxonId = TaxonId(34199);

    pub const VIRUSES: TaxonId = TaxonId(10239);
    pub const DUPLODNAVIRIA: TaxonId = TaxonId(2731341);
    pub const CAUDOVIRICETES: TaxonId = TaxonId(2731619);
    pub const BOWSER: TaxonId = TaxonId(2560487);
    pub const INFLUENZA_A: TaxonId = TaxonId(11320);
    pub const HIV_1: TaxonId = TaxonId(11676);
    pub const HPV_16: TaxonId = TaxonId(333760);
    pub const POLYOMAVIRIDAE: TaxonId = TaxonId(151341);
    pub const PARVOVIRIDAE: TaxonId = TaxonId(10780);
    pub const PICOBIRNAVIRIDAE: TaxonId = TaxonId(585893);
    pub const PARTITIVIRIDAE: TaxonId = TaxonId(11012);
    pub const PICORNAVIRIDAE: TaxonId = TaxonId(12058);
    pub const HEPATITIS_B: TaxonId = TaxonId(10407);
    pub const UNCULTURED_MARINE_VIRUS: TaxonId = TaxonId(186617);

    pub const DELETED: TaxonId = TaxonId(3467805);
    pub const MERGED_OLD: TaxonId = TaxonId(12);
    pub const MERGED_NEW: TaxonId = TaxonId(74109);

    /// Never present in any fixture
    pub const MISSING: TaxonId = TaxonId(999_999_999);
}

const NCBI_SLICE: &str = r#"{
  "taxa": [
    {"taxid": 1, "name": "root", "rank": "no rank", "parent_taxid": 1},
    {"taxid": 131567, "name": "cellular organisms", "rank": "no rank", "parent_taxid": 1},

    {"taxid": 2, "name": "Bacteria", "rank": "superkingdom", "parent_taxid": 131567},
    {"taxid": 1224, "name": "Pseudomonadota", "rank": "phylum", "parent_taxid": 2},
    {"taxid": 1236, "name": "Gammaproteobacteria", "rank": "class", "parent_taxid": 1224},
    {"taxid": 91347, "name": "Enterobacterales", "rank": "order", "parent_taxid": 1236},
    {"taxid": 543, "name": "Enterobacteriaceae", "rank": "family", "parent_taxid": 91347},
    {"taxid": 561, "name": "Escherichia", "rank": "genus", "parent_taxid": 543},
    {"taxid": 562, "name": "Escherichia coli", "rank": "species", "parent_taxid": 561},
    {"taxid": 83333, "name": "Escherichia coli K-12", "rank": "strain", "parent_taxid": 562},
    {"taxid": 620, "name": "Shigella", "rank": "genus", "parent_taxid": 543},
    {"taxid": 623, "name": "Shigella flexneri", "rank": "species", "parent_taxid": 620},
    {"taxid": 1783272, "name": "Terrabacteria group", "rank": "clade", "parent_taxid": 2},
    {"taxid": 1239, "name": "Bacillota", "rank": "phylum", "parent_taxid": 1783272},
    {"taxid": 91061, "name": "Bacilli", "rank": "class", "parent_taxid": 1239},
    {"taxid": 186826, "name": "Lactobacillales", "rank": "order", "parent_taxid": 91061},
    {"taxid": 1300, "name": "Streptococcaceae", "rank": "family", "parent_taxid": 186826},
    {"taxid": 1301, "name": "Streptococcus", "rank": "genus", "parent_taxid": 1300},
    {"taxid": 1313, "name": "Streptococcus pneumoniae", "rank": "species", "parent_taxid": 1301},
    {"taxid": 1337, "name": "Streptococcus hyointestinalis", "rank": "species", "parent_taxid": 1301},
    {"taxid": 201174, "name": "Actinomycetota", "rank": "phylum", "parent_taxid": 1783272},
    {"taxid": 85012, "name": "Streptosporangiales", "rank": "order", "parent_taxid": 201174},
    {"taxid": 2004, "name": "Streptosporangiaceae", "rank": "family", "parent_taxid": 85012},
    {"taxid": 2000, "name": "Streptosporangium", "rank": "genus", "parent_taxid": 2004},

    {"taxid": 2157, "name": "Archaea", "rank": "superkingdom", "parent_taxid": 131567},
    {"taxid": 28890, "name": "Euryarchaeota", "rank": "phylum", "parent_taxid": 2157},
    {"taxid": 183925, "name": "Methanobacteria", "rank": "class", "parent_taxid": 28890},
    {"taxid": 2158, "name": "Methanobacteriales", "rank": "order", "parent_taxid": 183925},
    {"taxid": 2159, "name": "Methanobacteriaceae", "rank": "family", "parent_taxid": 2158},
    {"taxid": 2172, "name": "Methanobrevibacter", "rank": "genus", "parent_taxid": 2159},
    {"taxid": 2173, "name": "Methanobrevibacter smithii", "rank": "species", "parent_taxid": 2172},

    {"taxid": 2759, "name": "Eukaryota", "rank": "superkingdom", "parent_taxid": 131567},
    {"taxid": 33208, "name": "Metazoa", "rank": "kingdom", "parent_taxid": 2759},
    {"taxid": 7711, "name": "Chordata", "rank": "phylum", "parent_taxid": 33208},
    {"taxid": 40674, "name": "Mammalia", "rank": "class", "parent_taxid": 7711},
    {"taxid": 33554, "name": "Carnivora", "rank": "order", "parent_taxid": 40674},
    {"taxid": 9608, "name": "Canidae", "rank": "family", "parent_taxid": 33554},
    {"taxid": 9611, "name": "Canis", "rank": "genus", "parent_taxid": 9608},
    {"taxid": 9612, "name": "Canis lupus", "rank": "species", "parent_taxid": 9611},
    {"taxid": 33090, "name": "Viridiplantae", "rank": "kingdom", "parent_taxid": 2759},
    {"taxid": 4447, "name": "Liliopsida", "rank": "class", "parent_taxid": 33090},
    {"taxid": 73496, "name": "Asparagales", "rank": "order", "parent_taxid": 4447},
    {"taxid": 4677, "name": "Asphodelaceae", "rank": "family", "parent_taxid": 73496},
    {"taxid": 4685, "name": "Aloe", "rank": "genus", "parent_taxid": 4677},
    {"taxid": 34199, "name": "Aloe vera", "rank": "species", "parent_taxid": 4685},

    {"taxid": 10239, "name": "Viruses", "rank": "superkingdom", "parent_taxid": 1},
    {"taxid": 2731341, "name": "Duplodnaviria", "rank": "realm", "parent_taxid": 10239},
    {"taxid": 2731360, "name": "Heunggongvirae", "rank": "kingdom", "parent_taxid": 2731341},
    {"taxid": 2731618, "name": "Uroviricota", "rank": "phylum", "parent_taxid": 2731360},
    {"taxid": 2731619, "name": "Caudoviricetes", "rank": "class", "parent_taxid": 2731618},
    {"taxid": 2560486, "name": "Bowservirus", "rank": "genus", "parent_taxid": 2731619},
    {"taxid": 2560487, "name": "Bowservirus bowser", "rank": "species", "parent_taxid": 2560486},
    {"taxid": 2559587, "name": "Riboviria", "rank": "realm", "parent_taxid": 10239},
    {"taxid": 2732396, "name": "Orthornavirae", "rank": "kingdom", "parent_taxid": 2559587},
    {"taxid": 2497569, "name": "Negarnaviricota", "rank": "phylum", "parent_taxid": 2732396},
    {"taxid": 11308, "name": "Orthomyxoviridae", "rank": "family", "parent_taxid": 2497569},
    {"taxid": 197911, "name": "Alphainfluenzavirus", "rank": "genus", "parent_taxid": 11308},
    {"taxid": 11320, "name": "Alphainfluenzavirus influenzae", "rank": "species", "parent_taxid": 197911},
    {"taxid": 2732408, "name": "Pisuviricota", "rank": "phylum", "parent_taxid": 2732396},
    {"taxid": 2732460, "name": "Duplopiviricetes", "rank": "class", "parent_taxid": 2732408},
    {"taxid": 2732476, "name": "Durnavirales", "rank": "order", "parent_taxid": 2732460},
    {"taxid": 585893, "name": "Picobirnaviridae", "rank": "family", "parent_taxid": 2732476},
    {"taxid": 11012, "name": "Partitiviridae", "rank": "family", "parent_taxid": 2732476},
    {"taxid": 2732506, "name": "Pisoniviricetes", "rank": "class", "parent_taxid": 2732408},
    {"taxid": 464095, "name": "Picornavirales", "rank": "order", "parent_taxid": 2732506},
    {"taxid": 12058, "name": "Picornaviridae", "rank": "family", "parent_taxid": 464095},
    {"taxid": 2732397, "name": "Pararnavirae", "rank": "kingdom", "parent_taxid": 2559587},
    {"taxid": 2732409, "name": "Artverviricota", "rank": "phylum", "parent_taxid": 2732397},
    {"taxid": 11632, "name": "Retroviridae", "rank": "family", "parent_taxid": 2732409},
    {"taxid": 11646, "name": "Lentivirus", "rank": "genus", "parent_taxid": 11632},
    {"taxid": 11676, "name": "Human immunodeficiency virus 1", "rank": "species", "parent_taxid": 11646},
    {"taxid": 10404, "name": "Hepadnaviridae", "rank": "family", "parent_taxid": 2732409},
    {"taxid": 10405, "name": "Orthohepadnavirus", "rank": "genus", "parent_taxid": 10404},
    {"taxid": 10407, "name": "Hepatitis B virus", "rank": "species", "parent_taxid": 10405},
    {"taxid": 2731342, "name": "Monodnaviria", "rank": "realm", "parent_taxid": 10239},
    {"taxid": 2732092, "name": "Shotokuvirae", "rank": "kingdom", "parent_taxid": 2731342},
    {"taxid": 2732415, "name": "Cossaviricota", "rank": "phylum", "parent_taxid": 2732092},
    {"taxid": 2732421, "name": "Papovaviricetes", "rank": "class", "parent_taxid": 2732415},
    {"taxid": 151340, "name": "Papillomaviridae", "rank": "family", "parent_taxid": 2732421},
    {"taxid": 333760, "name": "Human papillomavirus 16", "rank": "no rank", "parent_taxid": 151340},
    {"taxid": 151341, "name": "Polyomaviridae", "rank": "family", "parent_taxid": 2732421},
    {"taxid": 2732423, "name": "Quintoviricetes", "rank": "class", "parent_taxid": 2732415},
    {"taxid": 10780, "name": "Parvoviridae", "rank": "family", "parent_taxid": 2732423},
    {"taxid": 12429, "name": "unclassified viruses", "rank": "no rank", "parent_taxid": 10239},
    {"taxid": 186617, "name": "uncultured marine virus", "rank": "species", "parent_taxid": 12429}
  ],
  "deleted": [3467805],
  "merged": [{"old_taxid": 12, "new_taxid": 74109}]
}"#;

/// A consistent slice of the NCBI taxonomy
pub fn ncbi_store() -> InMemoryStore {
    InMemoryStore::from_json(NCBI_SLICE).expect("fixture JSON is valid")
}

/// Every taxid in [`ncbi_store`]
pub fn ncbi_taxids() -> Vec<TaxonId> {
    let mut ids: Vec<TaxonId> = ncbi_store().iter().map(|r| r.taxid).collect();
    ids.sort();
    ids
}

fn root() -> TaxonRecord {
    TaxonRecord::new(1u32, "root", "no rank", 1u32)
}

/// 10 -> 11 -> 12 -> 10, never reaching the root
pub fn cyclic_store() -> InMemoryStore {
    InMemoryStore::from_records([
        root(),
        TaxonRecord::new(10u32, "Ouroboros", "species", 11u32),
        TaxonRecord::new(11u32, "Ouroborus", "genus", 12u32),
        TaxonRecord::new(12u32, "Ouroboridae", "family", 10u32),
    ])
}

/// 20 points at a parent (21) that was never loaded
pub fn dangling_store() -> InMemoryStore {
    InMemoryStore::from_records([
        root(),
        TaxonRecord::new(20u32, "Orphanella", "genus", 21u32),
    ])
}

/// Bacteria with a genus whose name is a null placeholder and a species
/// with no rank value at all
pub fn null_name_store() -> InMemoryStore {
    let mut nameless_species = TaxonRecord::new(32u32, "Nullius secundus", "species", 30u32);
    nameless_species.rank = None;

    InMemoryStore::from_records([
        root(),
        TaxonRecord::new(131567u32, "cellular organisms", "no rank", 1u32),
        TaxonRecord::new(2u32, "Bacteria", "superkingdom", 131567u32),
        TaxonRecord::new(30u32, "None", "genus", 2u32),
        TaxonRecord::new(31u32, "Nullius primus", "species", 30u32),
        nameless_species,
        TaxonRecord::new(33u32, "Nullius tertius", "species", 30u32),
    ])
}

/// A straight chain of `depth` records below the root; the leaf is taxid
/// `depth + 1` and its lineage holds `depth + 1` records.
pub fn deep_chain_store(depth: u32) -> InMemoryStore {
    let mut records = vec![root()];
    for id in 2..=depth + 1 {
        records.push(TaxonRecord::new(id, format!("level {}", id), "no rank", id - 1));
    }
    InMemoryStore::from_records(records)
}
