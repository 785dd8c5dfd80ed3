// src/models/frequency_table.rs
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Occurrence counts keyed by normalized token.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Inserts the token with a count of 1, or bumps its existing count.
    #[inline]
    pub fn increment(&mut self, token: &str) {
        if let Some(count) = self.counts.get_mut(token) {
            *count = count.saturating_add(1);
        } else {
            self.counts.insert(token.to_owned(), 1);
        }
    }

    /// Adds every count from `other` into this table.
    #[inline]
    pub fn merge(&mut self, other: Self) {
        for (token, count) in other.counts {
            match self.counts.entry(token) {
                Entry::Occupied(mut slot) => {
                    let current = slot.get_mut();
                    *current = current.saturating_add(count);
                }
                Entry::Vacant(slot) => {
                    slot.insert(count);
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens seen.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0_u64, |acc, count| acc.saturating_add(*count))
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    #[inline]
    fn from_iter<I: IntoIterator<Item = &'a str>>(tokens: I) -> Self {
        let mut table = Self::new();
        for token in tokens {
            table.increment(token);
        }
        table
    }
}
