//! Tests for impact resolution

use component_finder_core::graph::{Module, ModuleGraph};
use component_finder_core::{outside_excluded_paths, resolve_impact};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// a -> b -> c (a depends on b, b depends on c)
fn chain() -> ModuleGraph {
    let mut graph = ModuleGraph::new();
    let a = graph.add_module(Module::new("a", "src/a.clj")).unwrap();
    let b = graph.add_module(Module::new("b", "src/b.clj")).unwrap();
    let c = graph.add_module(Module::new("c", "src/c.clj")).unwrap();
    graph.add_requires(a, b);
    graph.add_requires(b, c);
    graph
}

#[test]
fn test_chain_impact_is_ancestor_set() {
    let graph = chain();
    let impact = resolve_impact(&graph, &strings(&["c"]), |_| true);

    assert_eq!(impact.len(), 1);
    let dependents = &impact["c"];
    assert_eq!(dependents.len(), 2);
    assert!(dependents.contains("a"));
    assert!(dependents.contains("b"));
}

#[test]
fn test_mid_chain_impact() {
    let graph = chain();
    let impact = resolve_impact(&graph, &strings(&["b"]), |_| true);

    let dependents = &impact["b"];
    assert_eq!(dependents.len(), 1);
    assert!(dependents.contains("a"));
}

#[test]
fn test_excluded_module_filtered_but_traversed() {
    // Same chain, but b lives under an excluded path: b disappears from
    // the result while a, reached through b, stays.
    let mut graph = ModuleGraph::new();
    let a = graph.add_module(Module::new("a", "src/a.clj")).unwrap();
    let b = graph.add_module(Module::new("b", "test/b.clj")).unwrap();
    let c = graph.add_module(Module::new("c", "src/c.clj")).unwrap();
    graph.add_requires(a, b);
    graph.add_requires(b, c);

    let excludes = strings(&["test/", "qa/"]);
    let impact = resolve_impact(&graph, &strings(&["c"]), outside_excluded_paths(&excludes));

    let dependents = &impact["c"];
    assert_eq!(dependents.len(), 1);
    assert!(dependents.contains("a"));
    assert!(!dependents.contains("b"));
}

#[test]
fn test_unknown_changed_module_ignored() {
    let graph = chain();
    let impact = resolve_impact(&graph, &strings(&["nope", "c"]), |_| true);

    assert_eq!(impact.len(), 1);
    assert!(impact.contains_key("c"));
}

#[test]
fn test_insertion_order_preserved() {
    let graph = chain();
    let impact = resolve_impact(&graph, &strings(&["c", "b"]), |_| true);

    let keys: Vec<&String> = impact.keys().collect();
    assert_eq!(keys, vec!["c", "b"]);
}

#[test]
fn test_overlapping_sets_retained_independently() {
    let graph = chain();
    let impact = resolve_impact(&graph, &strings(&["b", "c"]), |_| true);

    // a depends on both; it appears in both entries, deduplication is the
    // classifier's job.
    assert!(impact["b"].contains("a"));
    assert!(impact["c"].contains("a"));
}

#[test]
fn test_cyclic_graph_terminates() {
    let mut graph = ModuleGraph::new();
    let a = graph.add_module(Module::new("a", "src/a.clj")).unwrap();
    let b = graph.add_module(Module::new("b", "src/b.clj")).unwrap();
    graph.add_requires(a, b);
    graph.add_requires(b, a);

    let impact = resolve_impact(&graph, &strings(&["a"]), |_| true);
    let dependents = &impact["a"];
    assert_eq!(dependents.len(), 1);
    assert!(dependents.contains("b"));
}

#[test]
fn test_no_dependents_gives_empty_set() {
    let graph = chain();
    // Nothing requires a.
    let impact = resolve_impact(&graph, &strings(&["a"]), |_| true);
    assert!(impact["a"].is_empty());
}

#[test]
fn test_outside_excluded_paths_predicate() {
    let eligible = Module::new("x", "src/x.clj");
    let excluded = Module::new("y", "qa/y.clj");
    let excludes = strings(&["test/", "qa/"]);

    let pred = outside_excluded_paths(&excludes);
    assert!(pred(&eligible));
    assert!(!pred(&excluded));
}
