//! Changed-file discovery via the external version-control tool

use std::io;
use std::process::Command;
use thiserror::Error;

/// Error types for version-control operations
#[derive(Error, Debug)]
pub enum VcsError {
    #[error("failed to invoke {tool}: {source}")]
    Spawn { tool: String, source: io::Error },

    #[error("{tool} diff failed: {stderr}")]
    Diff { tool: String, stderr: String },

    #[error("diff output was not valid UTF-8")]
    Encoding,
}

/// Lists the file paths changed between two revision references.
///
/// The pipeline depends on this trait rather than on a concrete executable
/// so tests can substitute a canned change set.
pub trait RevisionDiff: Send + Sync {
    /// Returns the paths changed between `earliest` and `latest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the diff ran but failed (e.g. an unknown
    /// revision). A missing version-control tool is not an error; see
    /// [`GitCli`].
    fn changed_files(&self, earliest: &str, latest: &str) -> Result<Vec<String>, VcsError>;
}

/// Live diff reader that shells out to the `git` CLI.
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    /// Use a different executable name, e.g. to simulate a missing tool.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl RevisionDiff for GitCli {
    fn changed_files(&self, earliest: &str, latest: &str) -> Result<Vec<String>, VcsError> {
        let output = match Command::new(&self.program)
            .args(["diff", "--name-only", earliest, latest])
            .output()
        {
            Ok(output) => output,
            // Tool not installed: degrade to "no changes detected".
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(VcsError::Spawn {
                    tool: self.program.clone(),
                    source: err,
                })
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(VcsError::Diff {
                tool: self.program.clone(),
                stderr,
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| VcsError::Encoding)?;
        Ok(stdout.lines().map(str::to_string).collect())
    }
}

/// Filter changed paths down to in-scope source files.
///
/// Keeps only paths ending in `extension`, drops paths under any excluded
/// prefix, and drops blank entries so an empty diff yields an empty result.
/// Filtering an already-filtered list is a no-op.
pub fn filter_source_paths<I, S>(paths: I, excludes: &[String], extension: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    paths
        .into_iter()
        .map(Into::into)
        .filter(|path| {
            !path.trim().is_empty()
                && path.ends_with(extension)
                && !excludes
                    .iter()
                    .any(|prefix| path.starts_with(prefix.as_str()))
        })
        .collect()
}
