//! Namespace dependency graph data structures and operations

pub mod builder;
pub mod query;

pub use builder::{build_graph, GraphBuild};
pub use query::GraphQuery;

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Unique identifier for a module in the dependency graph
pub type NodeId = NodeIndex;

/// A module: a namespace declared by exactly one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    name: String,
    file: PathBuf,
}

impl Module {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

/// Directed dependency graph over modules.
///
/// An edge A → B means "A requires B". Cycles are tolerated; traversals
/// carry a visited set. Built fresh per run, never persisted.
#[derive(Debug, Default)]
pub struct ModuleGraph {
    graph: DiGraph<Module, ()>,
    by_name: HashMap<String, NodeId>,
    by_file: HashMap<PathBuf, NodeId>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module node. If the namespace is already declared by another
    /// file the existing node is kept and `None` is returned.
    pub fn add_module(&mut self, module: Module) -> Option<NodeId> {
        if self.by_name.contains_key(module.name()) {
            return None;
        }

        let name = module.name.clone();
        let file = module.file.clone();
        let id = self.graph.add_node(module);
        self.by_name.insert(name, id);
        self.by_file.insert(file, id);

        Some(id)
    }

    /// Add a requires edge. Self-loops and duplicate edges are dropped.
    pub fn add_requires(&mut self, from: NodeId, to: NodeId) {
        if from == to {
            return;
        }
        if self.graph.find_edge(from, to).is_none() {
            self.graph.add_edge(from, to, ());
        }
    }

    pub fn module(&self, id: NodeId) -> Option<&Module> {
        self.graph.node_weight(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn find_by_file(&self, file: &Path) -> Option<NodeId> {
        self.by_file.get(file).copied()
    }

    /// All modules in the graph
    pub fn modules(&self) -> impl Iterator<Item = (NodeId, &Module)> {
        self.graph
            .node_indices()
            .map(move |id| (id, &self.graph[id]))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn inner(&self) -> &DiGraph<Module, ()> {
        &self.graph
    }

    /// Get a query interface for traversals
    pub fn query(&self) -> GraphQuery<'_> {
        GraphQuery::new(self)
    }
}
