// src/core/config.rs
pub mod loader;

use anyhow::Result;
use glob::{MatchOptions, Pattern};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::WordCountError;

pub use loader::{CONFIG_FILE_NAME, find_config, load_config};

/// Contents of a `.wfreq.toml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub exclude: Vec<String>,
    pub skip_unreadable: bool,
    pub threads: Option<usize>,
    pub follow_links: bool,
    /// File the values were read from, used to attribute bad patterns.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Where exclude patterns given with `--exclude` are reported as coming from.
pub const EXCLUDE_FLAG: &str = "--exclude";

/// Glob patterns for files to leave out of directory walks.
#[derive(Debug, Default, Clone)]
pub struct Exclusions {
    patterns: Vec<Pattern>,
}

impl Exclusions {
    /// Compiles command-line patterns, skipping blank entries.
    ///
    /// # Errors
    ///
    /// Returns `WordCountError::Config` if any pattern is not valid glob
    /// syntax.
    #[inline]
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        Self::with_origin(patterns, Path::new(EXCLUDE_FLAG))
    }

    /// Compiles patterns read from `origin`, skipping blank entries.
    ///
    /// # Errors
    ///
    /// Returns `WordCountError::Config` naming `origin` if any pattern is
    /// not valid glob syntax.
    #[inline]
    pub fn with_origin<S: AsRef<str>>(patterns: &[S], origin: &Path) -> Result<Self> {
        let mut compiled = Vec::new();
        for raw in patterns {
            let raw = raw.as_ref().trim();
            if raw.is_empty() {
                continue;
            }
            let pattern = Pattern::new(raw).map_err(|e| WordCountError::Config {
                path: origin.to_path_buf(),
                message: format!("invalid exclude pattern {raw:?}: {e}"),
            })?;
            compiled.push(pattern);
        }
        Ok(Self { patterns: compiled })
    }

    #[inline]
    pub fn extend(&mut self, other: Self) {
        self.patterns.extend(other.patterns);
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Checks the full path first, then the bare file name, so `*.log`
    /// and `**/target/**` both behave as expected.
    #[inline]
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };
        self.patterns.iter().any(|pattern| {
            pattern.matches_path_with(path, options)
                || path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| pattern.matches_with(name, options))
        })
    }
}

/// Effective settings for one run: the config file merged with CLI flags.
#[derive(Debug, Default, Clone)]
pub struct Settings {
    pub exclusions: Exclusions,
    pub skip_unreadable: bool,
    pub threads: Option<usize>,
    pub follow_links: bool,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub exclude: Vec<String>,
    pub skip_unreadable: bool,
    pub threads: Option<usize>,
}

impl Settings {
    /// Merges a config file with command-line overrides. Exclude patterns
    /// from both sources apply; `threads` and `skip_unreadable` from the
    /// command line win.
    ///
    /// # Errors
    ///
    /// Returns `WordCountError::Config` if any exclude pattern fails to
    /// compile, naming the config file or `--exclude` as its source.
    #[inline]
    pub fn merge(file: FileConfig, overrides: Overrides) -> Result<Self> {
        let origin = file
            .source
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        let mut exclusions = Exclusions::with_origin(&file.exclude, &origin)?;
        exclusions.extend(Exclusions::new(&overrides.exclude)?);

        Ok(Self {
            exclusions,
            skip_unreadable: file.skip_unreadable || overrides.skip_unreadable,
            threads: overrides.threads.or(file.threads).filter(|&n| n > 0),
            follow_links: file.follow_links,
        })
    }
}
