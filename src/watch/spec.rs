// src/watch/spec.rs

use std::path::PathBuf;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::errors::ConfigError;

/// Pattern used when neither a glob nor an extension is supplied: every file
/// under every watched directory, recursively.
pub const DEFAULT_GLOB: &str = "**/*";

/// How qualifying files are selected.
///
/// Exactly one rule wins, in this order: an explicit glob, a file-extension
/// shorthand, the catch-all default.
#[derive(Debug, Clone, Default)]
pub struct GlobRule {
    /// Explicit glob pattern; overrides everything else.
    pub glob: Option<String>,
    /// Extension shorthand; expands to `**/[^.]*.EXT` (non-hidden files
    /// ending in `.EXT`, recursively).
    pub extension: Option<String>,
}

/// Immutable description of what to watch: the directory list plus the
/// resolved glob, with the matcher compiled once up front.
#[derive(Clone)]
pub struct WatchSpec {
    directories: Vec<PathBuf>,
    glob: String,
    matcher: GlobSet,
}

impl std::fmt::Debug for WatchSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchSpec")
            .field("directories", &self.directories)
            .field("glob", &self.glob)
            .finish_non_exhaustive()
    }
}

impl WatchSpec {
    /// Resolve `rule` per the precedence above and compile the matcher.
    pub fn new(directories: Vec<PathBuf>, rule: GlobRule) -> Result<Self, ConfigError> {
        if directories.is_empty() {
            return Err(ConfigError::NoDirectories);
        }

        let glob = match (rule.glob, rule.extension) {
            (Some(glob), _) => glob,
            (None, Some(ext)) => format!("**/[^.]*.{ext}"),
            (None, None) => DEFAULT_GLOB.to_string(),
        };

        let matcher = build_matcher(&glob)?;

        Ok(Self {
            directories,
            glob,
            matcher,
        })
    }

    /// Directories to watch, in input order.
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// The resolved glob pattern.
    pub fn glob(&self) -> &str {
        &self.glob
    }

    /// Directories joined by `:` in input order.
    pub fn path(&self) -> String {
        self.directories
            .iter()
            .map(|d| d.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(":")
    }

    /// Whether a path, already relativized to its watched directory and
    /// using forward slashes (e.g. `"src/main.rs"`), qualifies.
    pub fn is_match(&self, rel_path: &str) -> bool {
        self.matcher.is_match(rel_path)
    }
}

/// Compile a single glob into a matcher.
///
/// `literal_separator` keeps `*` and character classes from crossing `/`, so
/// `**/[^.]*.txt` really excludes hidden files at every depth.
fn build_matcher(pattern: &str) -> Result<GlobSet, ConfigError> {
    let invalid = |source: globset::Error| ConfigError::InvalidGlob {
        pattern: pattern.to_string(),
        source,
    };

    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(invalid)?;

    let mut builder = GlobSetBuilder::new();
    builder.add(glob);
    builder.build().map_err(invalid)
}
