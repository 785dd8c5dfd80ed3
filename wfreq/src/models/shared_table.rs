// src/models/shared_table.rs
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::FrequencyTable;

/// A frequency table that many worker threads can update at once.
///
/// Owned by the run and handed to each file task by reference. Every
/// operation takes the lock once, so increments are never lost.
#[derive(Debug, Default)]
pub struct SharedTable {
    inner: Mutex<FrequencyTable>,
}

impl SharedTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FrequencyTable::new()),
        }
    }

    // A panicking worker cannot leave a half-applied update behind, so a
    // poisoned table is still consistent.
    fn lock(&self) -> MutexGuard<'_, FrequencyTable> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn increment(&self, token: &str) {
        self.lock().increment(token);
    }

    /// Merges a finished per-file table under a single lock.
    #[inline]
    pub fn absorb(&self, table: FrequencyTable) {
        if table.is_empty() {
            return;
        }
        self.lock().merge(table);
    }

    #[inline]
    #[must_use]
    pub fn count(&self, token: &str) -> u64 {
        self.lock().count(token)
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> FrequencyTable {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
