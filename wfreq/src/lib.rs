// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;

pub use cli::{Args, run, run_with_writer};
pub use crate::core::config::{Exclusions, FileConfig, Settings, find_config, load_config};
pub use crate::core::scanner::{
    CountSummary, Enumerated, count_file, count_paths, enumerate, resolve_argument,
};
pub use crate::core::tokenizer::{normalize, tokenize};
pub use error::{USAGE, WordCountError};
pub use models::{FrequencyTable, RankedEntry, SharedTable};
pub use report::{print_report, rank, render_entry};
