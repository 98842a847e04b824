//! End-to-end resolver pipeline: diff, graph, impact, classify

use crate::classify::classify_components;
use crate::config::FinderConfig;
use crate::graph::build_graph;
use crate::impact::{outside_excluded_paths, resolve_impact};
use crate::parser::HeaderParser;
use crate::report::ImpactReport;
use crate::source::SourceTree;
use crate::vcs::{filter_source_paths, RevisionDiff};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// A finished pipeline run: the report plus non-fatal warnings collected
/// along the way.
pub struct PipelineOutput {
    pub report: ImpactReport,
    pub warnings: Vec<String>,
}

/// Run the full resolver pipeline.
///
/// Strictly sequential: read the diff, build the graph, resolve impact,
/// classify components. All collaborators that touch the outside world
/// come in as trait objects.
pub fn run_pipeline(
    config: &FinderConfig,
    vcs: &dyn RevisionDiff,
    tree: &dyn SourceTree,
    parser: &dyn HeaderParser,
) -> Result<PipelineOutput> {
    // 1. Changed files between the two revisions, filtered to in-scope
    //    source files.
    let changed_paths = vcs.changed_files(&config.general.diff_head, &config.general.diff_base)?;
    let changed_paths = filter_source_paths(
        changed_paths,
        &config.paths.excludes,
        &config.classify.extension,
    );

    // 2. Dependency graph over all scanned roots.
    let roots: Vec<PathBuf> = config.paths.sources.iter().map(PathBuf::from).collect();
    let build = build_graph(tree, parser, &roots)?;
    let graph = build.graph;
    let warnings = build.warnings;

    // 3. Changed files -> changed modules. A changed path the graph does
    //    not know (deleted file, unscanned root) is ignored.
    let changed_modules: Vec<String> = changed_paths
        .iter()
        .filter_map(|path| graph.find_by_file(Path::new(path)))
        .filter_map(|id| graph.module(id))
        .map(|module| module.name().to_string())
        .collect();

    // 4. Transitive dependents, honoring path exclusions.
    let impact = resolve_impact(
        &graph,
        &changed_modules,
        outside_excluded_paths(&config.paths.excludes),
    );

    // 5. Entry-point classification.
    let components =
        classify_components(&impact, &graph, tree, &config.classify.entry_point_marker);

    Ok(PipelineOutput {
        report: ImpactReport {
            components,
            impact,
            changed_modules,
        },
        warnings,
    })
}
