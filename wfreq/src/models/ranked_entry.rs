// src/models/ranked_entry.rs
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

impl RankedEntry {
    #[inline]
    #[must_use]
    pub fn new(word: &str, count: u64) -> Self {
        Self {
            word: word.to_owned(),
            count,
        }
    }

    /// Report order: highest count first, equal counts alphabetically.
    #[inline]
    #[must_use]
    pub fn report_order(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}
