//! Graph traversals for impact resolution

use super::{ModuleGraph, NodeId};
use petgraph::Direction;
use std::collections::{HashSet, VecDeque};

/// A query interface for dependency traversals
pub struct GraphQuery<'a> {
    graph: &'a ModuleGraph,
}

impl<'a> GraphQuery<'a> {
    pub fn new(graph: &'a ModuleGraph) -> Self {
        Self { graph }
    }

    /// Modules that directly require the given module.
    pub fn dependents(&self, node: NodeId) -> Vec<NodeId> {
        self.graph
            .inner()
            .neighbors_directed(node, Direction::Incoming)
            .collect()
    }

    /// Modules that require the given module, directly or through a chain
    /// of requirements.
    ///
    /// Breadth-first over reversed edges. The visited set guarantees
    /// termination on cyclic graphs and keeps the result duplicate-free;
    /// the start node is never part of its own result.
    pub fn transitive_dependents(&self, node: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        queue.push_back(node);
        visited.insert(node);

        while let Some(current) = queue.pop_front() {
            for dependent in self
                .graph
                .inner()
                .neighbors_directed(current, Direction::Incoming)
            {
                if visited.insert(dependent) {
                    result.push(dependent);
                    queue.push_back(dependent);
                }
            }
        }

        result
    }

    /// Modules the given module requires directly.
    pub fn dependencies(&self, node: NodeId) -> Vec<NodeId> {
        self.graph
            .inner()
            .neighbors_directed(node, Direction::Outgoing)
            .collect()
    }
}
