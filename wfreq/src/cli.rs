// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::core::config::{FileConfig, Overrides, Settings, find_config, load_config};
use crate::core::scanner::{CountSummary, count_paths, resolve_argument};
use crate::report::print_report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of most frequent words to print
    #[arg(allow_negative_numbers = true)]
    pub top: i64,

    /// Files or directories to read (directories are scanned recursively)
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Config file to use instead of searching for .wfreq.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Glob patterns of files to skip inside directories (comma-separated)
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Number of worker threads (defaults to one per CPU)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Skip files that cannot be opened or read instead of stopping
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Loads the config file, if any, and applies command-line overrides.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The config file cannot be read or parsed
    /// * An exclude pattern is not valid glob syntax
    /// * The working directory cannot be determined
    #[inline]
    pub fn settings(&self) -> Result<Settings> {
        let config_path = match &self.config {
            Some(path) => Some(path.clone()),
            None => find_config(&env::current_dir()?),
        };
        let file_config = match config_path {
            Some(path) => {
                info!(path = %path.display(), "using config file");
                load_config(&path)?
            }
            None => FileConfig::default(),
        };

        let overrides = Overrides {
            exclude: self
                .exclude
                .as_deref()
                .map(|list| list.split(',').map(str::to_owned).collect())
                .unwrap_or_default(),
            skip_unreadable: self.skip_unreadable,
            threads: self.threads,
        };

        Settings::merge(file_config, overrides)
    }
}

/// Counts the words under every path argument and writes the report to `out`.
///
/// # Errors
///
/// This function may return an error if:
/// * A path argument is empty
/// * The configuration is invalid
/// * A path cannot be found or a file cannot be read
/// * The report cannot be written
#[inline]
pub fn run_with_writer<W: Write>(args: &Args, out: &mut W) -> Result<CountSummary> {
    let paths = args
        .paths
        .iter()
        .map(|raw| resolve_argument(raw))
        .collect::<Result<Vec<_>>>()?;
    let settings = args.settings()?;

    let summary = count_paths(&paths, &settings).context("Failed to count words")?;
    if summary.files_skipped > 0 {
        warn!(skipped = summary.files_skipped, "some files were skipped");
    }

    print_report(out, &summary.table, args.top).context("Failed to write report")?;
    Ok(summary)
}

/// Runs the program, printing the report to standard output.
///
/// # Errors
///
/// See [`run_with_writer`].
#[inline]
pub fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_writer(args, &mut out)?;
    Ok(())
}
