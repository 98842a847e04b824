//! Transitive-dependent resolution for changed modules

use crate::graph::{Module, ModuleGraph};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Insertion-ordered mapping from each changed module to the set of its
/// eligible transitive dependents. Entry order is change-detection order;
/// the value sets are unordered.
pub type ImpactMap = IndexMap<String, HashSet<String>>;

/// Resolve the impact of a set of changed modules.
///
/// For each changed module present in the graph, collects every module
/// that requires it directly or transitively. Changed modules the graph
/// does not know are ignored. Eligibility filters which dependents are
/// reported, not which are traversed: an excluded module still propagates
/// impact to its own dependents.
///
/// Overlapping dependent sets from different changed modules are retained
/// independently; deduplication happens in the classifier.
pub fn resolve_impact<F>(graph: &ModuleGraph, changed: &[String], is_eligible: F) -> ImpactMap
where
    F: Fn(&Module) -> bool,
{
    let mut impact = ImpactMap::new();

    for name in changed {
        let Some(node) = graph.find_by_name(name) else {
            continue;
        };

        let dependents: HashSet<String> = graph
            .query()
            .transitive_dependents(node)
            .into_iter()
            .filter_map(|id| graph.module(id))
            .filter(|module| is_eligible(module))
            .map(|module| module.name().to_string())
            .collect();

        impact.insert(name.clone(), dependents);
    }

    impact
}

/// Eligibility predicate rejecting modules declared under any of the
/// excluded path prefixes.
pub fn outside_excluded_paths(excludes: &[String]) -> impl Fn(&Module) -> bool + '_ {
    move |module: &Module| {
        let path = module.file().to_string_lossy();
        !excludes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}
