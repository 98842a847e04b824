//! Component Finder Core - change-impact resolution engine
//!
//! This crate answers one question: given two revisions of a Clojure source
//! tree, which deployable components are transitively affected by the files
//! that changed between them?
//!
//! The pipeline is strictly sequential:
//! - read the changed files from version control ([`vcs`])
//! - build a namespace dependency graph from the source roots ([`graph`])
//! - walk the graph backwards from each changed namespace ([`impact`])
//! - keep the dependents whose file defines an entry point ([`classify`])
//! - render the result ([`report`])
//!
//! Everything that touches the outside world (the version-control tool, the
//! filesystem) is behind a trait so runs are reproducible in tests.

pub mod classify;
pub mod config;
pub mod deadline;
pub mod graph;
pub mod impact;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod vcs;

pub use classify::classify_components;
pub use config::FinderConfig;
pub use deadline::{run_with_deadline, DeadlineOutcome};
pub use graph::{build_graph, GraphBuild, Module, ModuleGraph, NodeId};
pub use impact::{outside_excluded_paths, resolve_impact, ImpactMap};
pub use parser::{ClojureParser, HeaderParser, NsHeader, ParseError};
pub use pipeline::{run_pipeline, PipelineOutput};
pub use report::ImpactReport;
pub use source::{LiveSourceTree, MemorySourceTree, SourceTree};
pub use vcs::{filter_source_paths, GitCli, RevisionDiff, VcsError};

/// Component-finder version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
