//! Source header parsing - namespace declarations and their requirements

pub mod clojure;

pub use clojure::ClojureParser;

use std::path::Path;
use thiserror::Error;

/// Error types for header parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no namespace declaration found")]
    MissingNamespace,

    #[error("malformed namespace form: {0}")]
    Malformed(String),
}

/// A parsed source header: the namespace the file declares and the
/// namespaces it requires. One file declares exactly one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NsHeader {
    pub name: String,
    pub requires: Vec<String>,
}

/// Parses a source file header into a structured [`NsHeader`].
///
/// Implementations operate on source text only, never the filesystem, so
/// they can be exercised in tests without fixtures on disk.
pub trait HeaderParser: Send + Sync {
    /// File extensions this parser handles (e.g. `[".clj"]`).
    fn extensions(&self) -> &[&str];

    /// Parse the header of `source`; `path` is for diagnostics only.
    fn parse_source(&self, source: &str, path: &Path) -> Result<NsHeader, ParseError>;
}
