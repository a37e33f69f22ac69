//! Action history queries

use crate::models::HistoryEntry;

use super::Library;

impl Library {
    /// Up to `n` most recent entries, newest first
    pub fn recent_history(&self, n: usize) -> Vec<&HistoryEntry> {
        self.repository.history.last(n)
    }

    /// Every entry, oldest first
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.repository.history.iter().cloned().collect()
    }

    pub fn last_action(&self) -> Option<&HistoryEntry> {
        self.repository.history.peek()
    }
}
