//! Merge lineages into one tree and draw it as indented text
//!
//! ```text
//! ╙── root
//!     └─╼ cellular organisms
//!         └─╼ Bacteria
//!             ├─╼ Escherichia coli
//!             └─╼ Bacillus subtilis
//! ```

use crate::walker::LineageWalker;
use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use taxaplease_core::{LineageError, LineageResult, TaxonId, TaxonRecord, TaxonomyStore};

const TOP_LEVEL: &str = "╙── ";
const BRANCH: &str = "├─╼ ";
const LAST_BRANCH: &str = "└─╼ ";
const CONTINUE: &str = "│   ";
const BLANK: &str = "    ";

/// Several lineages merged into a parent -> child graph keyed by taxid
///
/// Records without a usable name or rank are dropped while merging; their
/// children hang from the nearest printable ancestor.
#[derive(Debug, Clone, Default)]
pub struct LineageGraph {
    graph: DiGraph<TaxonRecord, ()>,
    nodes: IndexMap<TaxonId, NodeIndex>,
    roots: Vec<NodeIndex>,
}

impl LineageGraph {
    /// Add one lineage, given root first
    fn merge<'r>(&mut self, lineage: impl Iterator<Item = &'r TaxonRecord>) {
        let mut parent: Option<NodeIndex> = None;

        for record in lineage.filter(|r| r.is_printable()) {
            let node = match self.nodes.get(&record.taxid) {
                Some(&node) => node,
                None => {
                    let node = self.graph.add_node(record.clone());
                    self.nodes.insert(record.taxid, node);
                    node
                }
            };

            match parent {
                Some(p) => {
                    if self.graph.find_edge(p, node).is_none() {
                        self.graph.add_edge(p, node, ());
                    }
                }
                None => {
                    if !self.roots.contains(&node) {
                        self.roots.push(node);
                    }
                }
            }
            parent = Some(node);
        }
    }

    /// Children in the order they were first merged
    fn children(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect();
        children.sort();
        children
    }

    pub fn graph(&self) -> &DiGraph<TaxonRecord, ()> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, taxid: TaxonId) -> bool {
        self.nodes.contains_key(&taxid)
    }

    pub fn roots(&self) -> Vec<&TaxonRecord> {
        self.roots.iter().map(|&n| &self.graph[n]).collect()
    }

    pub fn children_of(&self, taxid: TaxonId) -> Vec<&TaxonRecord> {
        match self.nodes.get(&taxid) {
            Some(&node) => self
                .children(node)
                .into_iter()
                .map(|n| &self.graph[n])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Records with no children, in merge order
    pub fn leaves(&self) -> Vec<&TaxonRecord> {
        self.nodes
            .values()
            .filter(|&&n| {
                self.graph
                    .neighbors_directed(n, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .map(|&n| &self.graph[n])
            .collect()
    }

    /// Draw the merged tree, one name per line
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for &root in &self.roots {
            out.push_str(TOP_LEVEL);
            self.push_label(&mut out, root);
            self.write_children(&mut out, root, BLANK);
        }
        out
    }

    fn write_children(&self, out: &mut String, node: NodeIndex, prefix: &str) {
        let children = self.children(node);
        let count = children.len();

        for (i, child) in children.into_iter().enumerate() {
            let is_last = i + 1 == count;
            out.push_str(prefix);
            out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
            self.push_label(out, child);

            let child_prefix = format!("{}{}", prefix, if is_last { BLANK } else { CONTINUE });
            self.write_children(out, child, &child_prefix);
        }
    }

    fn push_label(&self, out: &mut String, node: NodeIndex) {
        // merge() only admits printable records
        if let Some(name) = self.graph[node].display_name() {
            out.push_str(name);
        }
        out.push('\n');
    }
}

pub struct GraphRenderer<'a, S: TaxonomyStore + ?Sized> {
    walker: LineageWalker<'a, S>,
}

impl<'a, S: TaxonomyStore + ?Sized> GraphRenderer<'a, S> {
    pub fn new(walker: LineageWalker<'a, S>) -> Self {
        Self { walker }
    }

    /// Merge the lineages of all `taxids`
    ///
    /// Every taxid is checked against the store before any lineage is
    /// walked.
    pub fn lineage_graph(&self, taxids: &[TaxonId]) -> LineageResult<LineageGraph> {
        if taxids.is_empty() {
            return Err(LineageError::EmptyQuery { operation: "render" });
        }
        self.walker.ensure_all_exist(taxids)?;

        let mut graph = LineageGraph::default();
        for &taxid in taxids {
            let chain = self.walker.ancestors_of(taxid)?;
            graph.merge(chain.root_first());
        }

        tracing::debug!(
            "Merged {} lineages into {} nodes",
            taxids.len(),
            graph.node_count()
        );
        Ok(graph)
    }

    pub fn render(&self, taxids: &[TaxonId]) -> LineageResult<String> {
        Ok(self.lineage_graph(taxids)?.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use taxaplease_core::InMemoryStore;
    use taxaplease_test::{assert_no_placeholders, cyclic_store, ncbi_store, null_name_store, taxa};

    fn renderer(store: &InMemoryStore) -> GraphRenderer<'_, InMemoryStore> {
        GraphRenderer::new(LineageWalker::new(store))
    }

    #[test]
    fn test_render_single_lineage() {
        let store = ncbi_store();
        let text = renderer(&store).render(&[taxa::M_SMITHII]).unwrap();

        let expected = "\
╙── root
    └─╼ cellular organisms
        └─╼ Archaea
            └─╼ Euryarchaeota
                └─╼ Methanobacteria
                    └─╼ Methanobacteriales
                        └─╼ Methanobacteriaceae
                            └─╼ Methanobrevibacter
                                └─╼ Methanobrevibacter smithii
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_two_siblings() {
        let store = ncbi_store();
        let text = renderer(&store)
            .render(&[taxa::S_PNEUMONIAE, taxa::S_HYOINTESTINALIS])
            .unwrap();

        let expected = "\
╙── root
    └─╼ cellular organisms
        └─╼ Bacteria
            └─╼ Terrabacteria group
                └─╼ Bacillota
                    └─╼ Bacilli
                        └─╼ Lactobacillales
                            └─╼ Streptococcaceae
                                └─╼ Streptococcus
                                    ├─╼ Streptococcus pneumoniae
                                    └─╼ Streptococcus hyointestinalis
";
        assert_eq!(text, expected);
        assert_no_placeholders(&text);
    }

    #[test]
    fn test_render_continuation_bars() {
        let store = ncbi_store();
        let text = renderer(&store)
            .render(&[taxa::E_COLI, taxa::S_FLEXNERI, taxa::M_SMITHII])
            .unwrap();

        let expected = "\
╙── root
    └─╼ cellular organisms
        ├─╼ Bacteria
        │   └─╼ Pseudomonadota
        │       └─╼ Gammaproteobacteria
        │           └─╼ Enterobacterales
        │               └─╼ Enterobacteriaceae
        │                   ├─╼ Escherichia
        │                   │   └─╼ Escherichia coli
        │                   └─╼ Shigella
        │                       └─╼ Shigella flexneri
        └─╼ Archaea
            └─╼ Euryarchaeota
                └─╼ Methanobacteria
                    └─╼ Methanobacteriales
                        └─╼ Methanobacteriaceae
                            └─╼ Methanobrevibacter
                                └─╼ Methanobrevibacter smithii
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_ancestor_input_adds_no_branch() {
        let store = ncbi_store();
        let graph = renderer(&store)
            .lineage_graph(&[taxa::E_COLI, taxa::ESCHERICHIA, taxa::E_COLI])
            .unwrap();

        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.edge_count(), 8);
        let leaves: Vec<_> = graph.leaves().into_iter().map(|r| r.taxid).collect();
        assert_eq!(leaves, vec![taxa::E_COLI]);
    }

    #[test]
    fn test_graph_structure() {
        let store = ncbi_store();
        let graph = renderer(&store)
            .lineage_graph(&[taxa::E_COLI, taxa::BOWSER])
            .unwrap();

        assert_eq!(graph.roots().len(), 1);
        let below_root: Vec<_> = graph
            .children_of(taxa::ROOT)
            .into_iter()
            .map(|r| r.taxid)
            .collect();
        assert_eq!(below_root, vec![taxa::CELLULAR_ORGANISMS, taxa::VIRUSES]);
        assert!(graph.contains(taxa::DUPLODNAVIRIA));
        assert!(graph.children_of(taxa::MISSING).is_empty());
    }

    #[test]
    fn test_null_records_are_suppressed() {
        let store = null_name_store();
        let text = renderer(&store)
            .render(&[TaxonId(31), TaxonId(32), TaxonId(33)])
            .unwrap();

        let expected = "\
╙── root
    └─╼ cellular organisms
        └─╼ Bacteria
            ├─╼ Nullius primus
            └─╼ Nullius tertius
";
        assert_eq!(text, expected);
        assert_no_placeholders(&text);
    }

    #[test]
    fn test_missing_taxid_fails_before_rendering() {
        let store = ncbi_store();
        assert_eq!(
            renderer(&store).render(&[taxa::E_COLI, taxa::MISSING]),
            Err(LineageError::TaxonNotFound(taxa::MISSING))
        );
        assert!(matches!(
            renderer(&store).render(&[]),
            Err(LineageError::EmptyQuery { .. })
        ));
    }

    #[test]
    fn test_cycle_does_not_hang() {
        let store = cyclic_store();
        let err = renderer(&store).render(&[TaxonId(11)]).unwrap_err();
        assert!(err.is_malformed());
    }
}
