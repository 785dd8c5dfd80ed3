// src/core/config/loader.rs
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::config::FileConfig;
use crate::error::WordCountError;

pub const CONFIG_FILE_NAME: &str = ".wfreq.toml";

/// Looks for a `.wfreq.toml` file in `dir` and then in each parent
/// directory, stopping at the first one found.
#[inline]
#[must_use]
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Reads and parses a config file.
///
/// # Arguments
///
/// * `path` - The config file to read
///
/// # Returns
///
/// * `Ok(FileConfig)` - The parsed configuration
///
/// # Errors
///
/// Returns `WordCountError::Config` if:
/// * The file cannot be read
/// * The file is not valid TOML or contains unknown keys
#[inline]
pub fn load_config(path: &Path) -> Result<FileConfig> {
    debug!(path = %path.display(), "loading config");

    let content = fs::read_to_string(path).map_err(|e| WordCountError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut config: FileConfig = toml::from_str(&content).map_err(|e| WordCountError::Config {
        path: path.to_path_buf(),
        message: e.message().to_owned(),
    })?;
    config.source = Some(path.to_path_buf());

    Ok(config)
}
