// src/core/scanner.rs
pub mod file;
pub mod paths;
#[cfg(test)]
pub mod test_utils;

use anyhow::{Context as _, Result};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

use crate::core::config::Settings;
use crate::error::WordCountError;
use crate::models::{FrequencyTable, SharedTable};

pub use file::{count_file, count_reader};
pub use paths::{Enumerated, enumerate, resolve_argument};

/// The outcome of counting a set of paths.
#[derive(Debug, Default)]
pub struct CountSummary {
    pub table: FrequencyTable,
    pub files_counted: u64,
    pub files_skipped: u64,
}

/// Counts word frequency across every file the given paths expand to.
///
/// Paths are expanded in argument order, then files are counted in
/// parallel. Each file is tallied on its own and merged into a table
/// shared by the whole run.
///
/// # Arguments
///
/// * `paths` - Files and directories to scan
/// * `settings` - Exclusions, thread count and error policy
///
/// # Returns
///
/// * `Ok(CountSummary)` - The merged table plus file statistics
///
/// # Errors
///
/// The first failing path or file aborts the whole run, unless
/// `settings.skip_unreadable` is set, in which case files that cannot be
/// opened or read are logged and skipped.
#[inline]
pub fn count_paths(paths: &[PathBuf], settings: &Settings) -> Result<CountSummary> {
    let mut files = Vec::new();
    let mut skipped: u64 = 0;

    for path in paths {
        match enumerate(path, settings) {
            Ok(found) => {
                files.extend(found.files);
                skipped = skipped.saturating_add(found.skipped);
            }
            Err(e) if settings.skip_unreadable && is_per_file(&e) => {
                warn!(path = %path.display(), "skipping unreadable path");
                skipped = skipped.saturating_add(1);
            }
            Err(e) => return Err(e),
        }
    }
    info!(files = files.len(), "counting files");

    let shared = SharedTable::new();
    let counted = AtomicU64::new(0);
    let failed = AtomicU64::new(0);

    let mut builder = ThreadPoolBuilder::new();
    if let Some(threads) = settings.threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build().context("Failed to start worker threads")?;

    pool.install(|| {
        files.par_iter().try_for_each(|path| -> Result<()> {
            match count_file(path) {
                Ok(table) => {
                    shared.absorb(table);
                    counted.fetch_add(1, Ordering::Relaxed);
                    Ok(())
                }
                Err(e) if settings.skip_unreadable && is_per_file(&e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable file");
                    failed.fetch_add(1, Ordering::Relaxed);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        })
    })?;

    let summary = CountSummary {
        table: shared.into_inner(),
        files_counted: counted.into_inner(),
        files_skipped: skipped.saturating_add(failed.into_inner()),
    };
    debug!(
        words = summary.table.total(),
        distinct = summary.table.len(),
        skipped = summary.files_skipped,
        "counting finished"
    );
    Ok(summary)
}

fn is_per_file(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<WordCountError>()
        .is_some_and(WordCountError::is_per_file)
}
