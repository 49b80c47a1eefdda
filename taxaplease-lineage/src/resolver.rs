//! Common ancestors and rank distances across any number of taxids

use crate::walker::{LineageChain, LineageWalker};
use serde::Serialize;
use taxaplease_core::{LineageError, LineageResult, TaxonId, TaxonRecord, TaxonomyStore};

/// Levels from one input taxid up to the shared ancestor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxonLevels {
    pub taxid: TaxonId,
    pub levels: usize,
}

/// Breakdown behind [`AncestorResolver::rank_distance`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AncestorDistances {
    pub common_ancestor: TaxonId,
    /// One entry per input, in input order
    pub levels: Vec<TaxonLevels>,
    pub total: usize,
}

pub struct AncestorResolver<'a, S: TaxonomyStore + ?Sized> {
    walker: LineageWalker<'a, S>,
}

impl<'a, S: TaxonomyStore + ?Sized> AncestorResolver<'a, S> {
    pub fn new(walker: LineageWalker<'a, S>) -> Self {
        Self { walker }
    }

    /// Deepest taxid present on every input's lineage
    ///
    /// A single taxid is its own common ancestor, and when one input is an
    /// ancestor of the others it is returned itself.
    pub fn common_ancestor(&self, taxids: &[TaxonId]) -> LineageResult<TaxonId> {
        let chains = self.chains(taxids, "common_ancestor")?;
        Ok(shared_depth(taxids, &chains)?.1.taxid)
    }

    pub fn common_ancestor_record(&self, taxids: &[TaxonId]) -> LineageResult<TaxonRecord> {
        let chains = self.chains(taxids, "common_ancestor")?;
        Ok(shared_depth(taxids, &chains)?.1.clone())
    }

    /// Sum over all inputs of the parent edges between each input and the
    /// common ancestor
    pub fn rank_distance(&self, taxids: &[TaxonId]) -> LineageResult<usize> {
        Ok(self.ancestor_distances(taxids)?.total)
    }

    pub fn ancestor_distances(&self, taxids: &[TaxonId]) -> LineageResult<AncestorDistances> {
        let chains = self.chains(taxids, "rank_distance")?;
        let (depth, ancestor) = shared_depth(taxids, &chains)?;
        let common_ancestor = ancestor.taxid;

        // depth is the ancestor's index counted from the root, so each chain
        // has len - 1 - depth edges below it
        let levels: Vec<TaxonLevels> = taxids
            .iter()
            .zip(&chains)
            .map(|(&taxid, chain)| TaxonLevels {
                taxid,
                levels: chain.len() - 1 - depth,
            })
            .collect();
        let total = levels.iter().map(|l| l.levels).sum();

        tracing::debug!(
            "Common ancestor of {:?} is {} ({} levels in total)",
            taxids,
            common_ancestor,
            total
        );

        Ok(AncestorDistances {
            common_ancestor,
            levels,
            total,
        })
    }

    /// Walk every input, checking them all exist before the first walk
    fn chains(
        &self,
        taxids: &[TaxonId],
        operation: &'static str,
    ) -> LineageResult<Vec<LineageChain>> {
        if taxids.is_empty() {
            return Err(LineageError::EmptyQuery { operation });
        }
        self.walker.ensure_all_exist(taxids)?;
        taxids
            .iter()
            .map(|&taxid| self.walker.ancestors_of(taxid))
            .collect()
    }
}

/// Scan the chains root first and return the last position at which they
/// all agree, with the record found there.
fn shared_depth<'c>(
    taxids: &[TaxonId],
    chains: &'c [LineageChain],
) -> LineageResult<(usize, &'c TaxonRecord)> {
    let mut walks: Vec<_> = chains.iter().map(|c| c.root_first()).collect();
    let mut shared = None;

    for depth in 0.. {
        let mut step = walks.iter_mut().map(|w| w.next());
        let Some(Some(first)) = step.next() else {
            break;
        };
        if !step.all(|r| r.is_some_and(|r| r.taxid == first.taxid)) {
            break;
        }
        shared = Some((depth, first));
    }

    shared.ok_or_else(|| LineageError::NoCommonAncestor(taxids.to_vec()))
}
