//! Component classification - entry-point detection over impacted modules

use crate::graph::ModuleGraph;
use crate::impact::ImpactMap;
use crate::source::SourceTree;
use std::collections::BTreeSet;

/// Reduce an impact map to the deployable components it touches.
///
/// Takes the union of all dependent sets (a set union, so overlap between
/// changed modules collapses here), then keeps only modules whose
/// declaring file contains the entry-point marker. A file that has gone
/// missing since the graph was built is skipped, not fatal. The result is
/// sorted so reports are reproducible.
pub fn classify_components(
    impact: &ImpactMap,
    graph: &ModuleGraph,
    tree: &dyn SourceTree,
    marker: &str,
) -> Vec<String> {
    let candidates: BTreeSet<&String> = impact.values().flatten().collect();

    candidates
        .into_iter()
        .filter(|name| {
            graph
                .find_by_name(name.as_str())
                .and_then(|id| graph.module(id))
                .and_then(|module| tree.read_source(module.file()).ok())
                .is_some_and(|source| source.contains(marker))
        })
        .cloned()
        .collect()
}
