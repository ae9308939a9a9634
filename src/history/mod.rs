//! Calculation history.
//!
//! A newest-first log of completed calculations, capped at
//! [`HISTORY_CAPACITY`] entries. Recording past the cap drops the oldest
//! entry.

mod entry;

pub use entry::HistoryEntry;

use std::collections::VecDeque;
use uuid::Uuid;

/// Maximum number of entries kept.
pub const HISTORY_CAPACITY: usize = 50;

#[derive(Clone, Debug)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// A log holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a completed calculation as the newest entry.
    pub fn record(
        &mut self,
        expression: impl Into<String>,
        result: impl Into<String>,
    ) -> &HistoryEntry {
        self.entries.push_front(HistoryEntry::new(expression, result));
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Look up an entry by id.
    pub fn select(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Entry at `index`, where 0 is the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }
}
