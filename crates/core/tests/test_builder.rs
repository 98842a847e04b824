//! Tests for graph construction over source trees

use component_finder_core::{build_graph, ClojureParser, MemorySourceTree};
use std::path::PathBuf;

fn roots(paths: &[&str]) -> Vec<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}

#[test]
fn test_build_simple_chain() {
    let mut tree = MemorySourceTree::new();
    tree.insert("src/a.clj", "(ns a (:require [b]))")
        .insert("src/b.clj", "(ns b (:require [c]))")
        .insert("src/c.clj", "(ns c)");

    let build = build_graph(&tree, &ClojureParser::new(), &roots(&["src"])).unwrap();
    assert!(build.warnings.is_empty());
    assert_eq!(build.graph.node_count(), 3);
    assert_eq!(build.graph.edge_count(), 2);
}

#[test]
fn test_external_requirement_skipped() {
    let mut tree = MemorySourceTree::new();
    tree.insert("src/a.clj", "(ns a (:require [clojure.set] [b]))")
        .insert("src/b.clj", "(ns b)");

    let build = build_graph(&tree, &ClojureParser::new(), &roots(&["src"])).unwrap();
    // clojure.set is declared by no scanned file: external, not an error.
    assert!(build.warnings.is_empty());
    assert_eq!(build.graph.node_count(), 2);
    assert_eq!(build.graph.edge_count(), 1);
}

#[test]
fn test_malformed_file_warns_and_continues() {
    let mut tree = MemorySourceTree::new();
    tree.insert("src/a.clj", "(ns a (:require [b]))")
        .insert("src/b.clj", "(ns b)")
        .insert("src/broken.clj", "(defn f [x] x)");

    let build = build_graph(&tree, &ClojureParser::new(), &roots(&["src"])).unwrap();
    assert_eq!(build.warnings.len(), 1);
    assert!(build.warnings[0].contains("src/broken.clj"));
    assert_eq!(build.graph.node_count(), 2);
    assert_eq!(build.graph.edge_count(), 1);
}

#[test]
fn test_duplicate_namespace_first_file_wins() {
    let mut tree = MemorySourceTree::new();
    // BTreeMap iteration gives src/a.clj before src/z.clj.
    tree.insert("src/a.clj", "(ns dup.core)")
        .insert("src/z.clj", "(ns dup.core)");

    let build = build_graph(&tree, &ClojureParser::new(), &roots(&["src"])).unwrap();
    assert_eq!(build.graph.node_count(), 1);
    assert_eq!(build.warnings.len(), 1);

    let id = build.graph.find_by_name("dup.core").unwrap();
    assert_eq!(
        build.graph.module(id).unwrap().file().to_str(),
        Some("src/a.clj")
    );
}

#[test]
fn test_multiple_roots() {
    let mut tree = MemorySourceTree::new();
    tree.insert("src/a.clj", "(ns a (:require [m]))")
        .insert("modules/m.clj", "(ns m)");

    let build = build_graph(&tree, &ClojureParser::new(), &roots(&["src", "modules"])).unwrap();
    assert_eq!(build.graph.node_count(), 2);
    assert_eq!(build.graph.edge_count(), 1);
}

#[test]
fn test_build_is_deterministic() {
    let mut tree = MemorySourceTree::new();
    tree.insert("src/a.clj", "(ns a (:require [b] [c]))")
        .insert("src/b.clj", "(ns b (:require [c]))")
        .insert("src/c.clj", "(ns c)");

    let parser = ClojureParser::new();
    let first = build_graph(&tree, &parser, &roots(&["src"])).unwrap();
    let second = build_graph(&tree, &parser, &roots(&["src"])).unwrap();

    assert_eq!(first.graph.node_count(), second.graph.node_count());
    assert_eq!(first.graph.edge_count(), second.graph.edge_count());

    let names = |g: &component_finder_core::ModuleGraph| {
        let mut names: Vec<String> = g.modules().map(|(_, m)| m.name().to_string()).collect();
        names.sort();
        names
    };
    assert_eq!(names(&first.graph), names(&second.graph));
}

#[test]
fn test_empty_roots_give_empty_graph() {
    let tree = MemorySourceTree::new();
    let build = build_graph(&tree, &ClojureParser::new(), &roots(&["src"])).unwrap();
    assert_eq!(build.graph.node_count(), 0);
}
