//! Source tree access - live filesystem walking and in-memory fixtures

use anyhow::Result;
use ignore::WalkBuilder;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Read access to a tree of source files.
///
/// Abstracting the filesystem keeps graph construction and classification
/// testable against in-memory fixtures.
pub trait SourceTree: Send + Sync {
    /// List all source files with the given extension under `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be walked at all. Individual
    /// unreadable entries are skipped.
    fn list_sources(&self, root: &Path, extension: &str) -> Result<Vec<PathBuf>>;

    /// Read the contents of one source file.
    fn read_source(&self, path: &Path) -> io::Result<String>;
}

/// Source tree backed by the real filesystem.
///
/// Walks with the `ignore` crate so `.gitignore`d files never enter the
/// graph. Paths come back joined onto the given root (not canonicalized)
/// and sorted alphabetically, so they line up with the repo-relative paths
/// the diff reader reports.
pub struct LiveSourceTree;

impl SourceTree for LiveSourceTree {
    fn list_sources(&self, root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(_) => continue, // skip unreadable entries
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if path.to_string_lossy().ends_with(extension) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    fn read_source(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// In-memory source tree for tests: a map from path to file contents.
#[derive(Debug, Default)]
pub struct MemorySourceTree {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the fixture, replacing any previous contents.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> &mut Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Remove a file, e.g. to simulate deletion between build and classify.
    pub fn remove(&mut self, path: &Path) {
        self.files.remove(path);
    }
}

impl SourceTree for MemorySourceTree {
    fn list_sources(&self, root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        Ok(self
            .files
            .keys()
            .filter(|path| path.starts_with(root) && path.to_string_lossy().ends_with(extension))
            .cloned()
            .collect())
    }

    fn read_source(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no fixture file: {}", path.display()),
            )
        })
    }
}
