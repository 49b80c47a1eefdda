//! Custom assertions for lineage data

use taxaplease_core::{TaxonId, TaxonRecord};

/// Tokens that must never appear in rendered output
const PLACEHOLDERS: &[&str] = &["null", "None", "nan"];

/// Assert a lineage starts at `taxid` and ends at a self-parented root
pub fn assert_lineage_terminates(taxid: TaxonId, lineage: &[TaxonRecord]) {
    let first = lineage
        .first()
        .unwrap_or_else(|| panic!("lineage of {} is empty", taxid));
    assert_eq!(first.taxid, taxid, "lineage must start at the queried taxid");

    let last = lineage.last().expect("non-empty");
    assert!(
        last.is_root(),
        "lineage of {} ends at {} whose parent is {}",
        taxid,
        last.taxid,
        last.parent_taxid
    );
    assert!(
        lineage[..lineage.len() - 1].iter().all(|r| !r.is_root()),
        "only the last record of a lineage may be the root"
    );
}

/// Assert no line of rendered text is blank or a bare placeholder token
pub fn assert_no_placeholders(rendered: &str) {
    for line in rendered.lines() {
        let label = line
            .trim_start_matches(|c: char| " │├└╙─╼".contains(c))
            .trim();
        assert!(!label.is_empty(), "blank node in rendered tree:\n{}", rendered);
        assert!(
            !PLACEHOLDERS.contains(&label),
            "placeholder '{}' leaked into rendered tree:\n{}",
            label,
            rendered
        );
    }
}
