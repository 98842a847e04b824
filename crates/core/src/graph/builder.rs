//! Graph construction from discovered source files

use super::{Module, ModuleGraph};
use crate::parser::{HeaderParser, NsHeader};
use crate::source::SourceTree;
use anyhow::Result;
use rayon::prelude::*;
use std::path::PathBuf;

/// Result of a graph build: the graph plus non-fatal warnings (files that
/// failed to parse, duplicate namespace declarations).
pub struct GraphBuild {
    pub graph: ModuleGraph,
    pub warnings: Vec<String>,
}

/// Build the dependency graph for all source files under `roots`.
///
/// Headers are parsed in parallel, then nodes and edges are inserted
/// sequentially in discovery order so the result is deterministic for a
/// given tree. A requirement that no scanned file declares is external
/// and silently skipped; a file whose header fails to parse is recorded
/// as a warning and skipped.
pub fn build_graph(
    tree: &dyn SourceTree,
    parser: &dyn HeaderParser,
    roots: &[PathBuf],
) -> Result<GraphBuild> {
    let extension = parser.extensions().first().copied().unwrap_or(".clj");

    let mut files: Vec<PathBuf> = Vec::new();
    for root in roots {
        files.extend(tree.list_sources(root, extension)?);
    }

    let parsed: Vec<(PathBuf, Result<NsHeader, String>)> = files
        .par_iter()
        .map(|file| {
            let outcome = match tree.read_source(file) {
                Ok(source) => parser
                    .parse_source(&source, file)
                    .map_err(|err| format!("{}: {}", file.display(), err)),
                Err(err) => Err(format!("{}: {}", file.display(), err)),
            };
            (file.clone(), outcome)
        })
        .collect();

    let mut graph = ModuleGraph::new();
    let mut warnings = Vec::new();
    let mut headers = Vec::new();

    // First pass: declare every module so edges can resolve in any order.
    for (file, outcome) in parsed {
        match outcome {
            Ok(header) => {
                if graph
                    .add_module(Module::new(header.name.clone(), file.clone()))
                    .is_none()
                {
                    warnings.push(format!(
                        "{}: namespace {} already declared, keeping the first declaration",
                        file.display(),
                        header.name
                    ));
                    continue;
                }
                headers.push(header);
            }
            Err(warning) => warnings.push(warning),
        }
    }

    // Second pass: edges. Requirements on namespaces outside the scanned
    // roots are external, not errors.
    for header in &headers {
        let Some(from) = graph.find_by_name(&header.name) else {
            continue;
        };
        for required in &header.requires {
            if let Some(to) = graph.find_by_name(required) {
                graph.add_requires(from, to);
            }
        }
    }

    Ok(GraphBuild { graph, warnings })
}
