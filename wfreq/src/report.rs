// src/report.rs
use std::io::{self, Write};

use crate::models::{FrequencyTable, RankedEntry};

/// Picks the `top` most frequent words from the table.
///
/// A non-positive `top` yields nothing. Entries are ordered by count,
/// highest first, with equal counts listed alphabetically so the output
/// is the same on every run.
#[inline]
#[must_use]
pub fn rank(table: &FrequencyTable, top: i64) -> Vec<RankedEntry> {
    let Ok(limit) = usize::try_from(top) else {
        // Negative, or more than we could ever hold.
        return if top > 0 { rank_all(table) } else { Vec::new() };
    };
    if limit == 0 {
        return Vec::new();
    }

    let mut entries = rank_all(table);
    entries.truncate(limit);
    entries
}

fn rank_all(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(word, count)| RankedEntry::new(word, count))
        .collect();
    entries.sort_unstable_by(RankedEntry::report_order);
    entries
}

#[inline]
#[must_use]
pub fn render_entry(entry: &RankedEntry) -> String {
    format!("Word '<{}>' occured <{}> times", entry.word, entry.count)
}

/// Writes one rendered line per entry.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
#[inline]
pub fn write_report<W: Write>(out: &mut W, entries: &[RankedEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", render_entry(entry))?;
    }
    out.flush()
}

/// Ranks the table and writes the report, one line per word.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
#[inline]
pub fn print_report<W: Write>(out: &mut W, table: &FrequencyTable, top: i64) -> io::Result<()> {
    write_report(out, &rank(table, top))
}
