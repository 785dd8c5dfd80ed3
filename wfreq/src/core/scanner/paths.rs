// src/core/scanner/paths.rs
use anyhow::Result;
use std::path::{self, Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::Settings;
use crate::error::WordCountError;

/// Turns a raw command-line argument into the path to scan.
///
/// Arguments starting with a path separator are taken relative to the
/// working directory, so `/notes/` reads `./notes/`.
///
/// # Errors
///
/// Returns `WordCountError::Usage` for an empty argument.
#[inline]
pub fn resolve_argument(raw: &str) -> Result<PathBuf> {
    let Some(first) = raw.chars().next() else {
        return Err(WordCountError::Usage(String::from("empty path argument")).into());
    };

    if path::is_separator(first) {
        Ok(PathBuf::from(format!(".{raw}")))
    } else {
        Ok(PathBuf::from(raw))
    }
}

/// Regular files found under one path argument.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Enumerated {
    pub files: Vec<PathBuf>,
    /// Walk entries that could not be read and were passed over.
    pub skipped: u64,
}

/// Expands one path into the regular files it names.
///
/// A directory is walked recursively and every regular file beneath it is
/// returned in walk order, minus excluded files. A symlink whose target is
/// a regular file counts as a file even when links are not followed; linked
/// directories are only entered with `follow_links`. Anything else is taken
/// as a literal file path.
///
/// # Arguments
///
/// * `path` - A file or directory
/// * `settings` - Exclusion patterns, link handling and error policy
///
/// # Errors
///
/// Returns `WordCountError::Path` if:
/// * The path is neither a directory nor a regular file
/// * An entry beneath the directory cannot be read during the walk, unless
///   `settings.skip_unreadable` is set, in which case the entry is skipped
#[inline]
pub fn enumerate(path: &Path, settings: &Settings) -> Result<Enumerated> {
    if !path.is_dir() {
        if path.is_file() {
            return Ok(Enumerated {
                files: vec![path.to_path_buf()],
                skipped: 0,
            });
        }
        debug!(path = %path.display(), "not a file or directory");
        return Err(WordCountError::Path {
            path: path.to_path_buf(),
        }
        .into());
    }

    let mut found = Enumerated::default();
    for entry in WalkDir::new(path)
        .follow_links(settings.follow_links)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let failed = e.path().unwrap_or(path).to_path_buf();
                if settings.skip_unreadable {
                    warn!(path = %failed.display(), error = %e, "skipping unreadable entry");
                    found.skipped = found.skipped.saturating_add(1);
                    continue;
                }
                debug!(path = %path.display(), error = %e, "directory walk failed");
                return Err(WordCountError::Path { path: failed }.into());
            }
        };
        if !is_regular_file(&entry) {
            continue;
        }
        if settings.exclusions.matches(entry.path()) {
            trace!(path = %entry.path().display(), "excluded");
            continue;
        }
        found.files.push(entry.into_path());
    }

    debug!(
        path = %path.display(),
        files = found.files.len(),
        skipped = found.skipped,
        "enumerated directory"
    );
    Ok(found)
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
