//! Configuration file parsing for .component-finder.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file name, searched for in the working directory and its
/// ancestors.
pub const CONFIG_FILE: &str = ".component-finder.toml";

/// Lower bound for the pipeline timeout, in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 10;

/// Upper bound for the pipeline timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// Main configuration structure for .component-finder.toml
///
/// Every default lives here, not in core logic: callers build a config
/// once at the entry point and inject it into the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub classify: ClassifyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Revision passed first to the diff (default: HEAD)
    #[serde(default = "default_diff_head")]
    pub diff_head: String,

    /// Revision passed second to the diff (default: master)
    #[serde(default = "default_diff_base")]
    pub diff_base: String,

    /// Pipeline deadline in seconds; the CLI validates the 10-120 range
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Roots scanned for source files
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    /// Path prefixes never treated as components or eligible dependents
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Source file extension
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Textual marker identifying a runnable entry point
    #[serde(default = "default_marker")]
    pub entry_point_marker: String,
}

// Default functions
fn default_diff_head() -> String {
    "HEAD".to_string()
}

fn default_diff_base() -> String {
    "master".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_sources() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_excludes() -> Vec<String> {
    vec!["test/".to_string(), "qa/".to_string()]
}

fn default_extension() -> String {
    ".clj".to_string()
}

fn default_marker() -> String {
    "(defn -main".to_string()
}

impl Default for FinderConfig {
    fn default() -> Self {
        toml::from_str("").expect("empty TOML should parse to defaults")
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            diff_head: default_diff_head(),
            diff_base: default_diff_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            excludes: default_excludes(),
        }
    }
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            entry_point_marker: default_marker(),
        }
    }
}

impl FinderConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: FinderConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Find and load .component-finder.toml from `start_dir` or its
    /// ancestors; defaults when no file exists.
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Ok(Self::default())
    }
}
