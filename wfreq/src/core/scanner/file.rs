// src/core/scanner/file.rs
use anyhow::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::trace;

use crate::core::tokenizer::tokenize;
use crate::error::WordCountError;
use crate::models::FrequencyTable;

/// Counts every token in one file.
///
/// The file is read line by line. Bytes that are not valid UTF-8 are
/// replaced, and the replacement character never survives tokenizing.
///
/// # Errors
///
/// * `WordCountError::Path` - The file cannot be opened
/// * `WordCountError::Read` - Reading fails part way through
#[inline]
pub fn count_file(path: &Path) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|e| {
        trace!(path = %path.display(), error = %e, "open failed");
        WordCountError::Path {
            path: path.to_path_buf(),
        }
    })?;

    let table = count_reader(BufReader::new(file)).map_err(|source| WordCountError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    trace!(path = %path.display(), words = table.total(), "counted file");
    Ok(table)
}

/// Counts every token readable from `reader`.
///
/// # Errors
///
/// Returns the first I/O error raised by the reader.
#[inline]
pub fn count_reader<R: BufRead>(mut reader: R) -> std::io::Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        for token in tokenize(&line) {
            table.increment(&token);
        }
    }

    Ok(table)
}
