//! Action history entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged action, e.g. "Book added: Dune"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub recorded_at: DateTime<Utc>,
    pub action: String,
}

impl HistoryEntry {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            recorded_at: Utc::now(),
            action: action.into(),
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.recorded_at.format("%Y-%m-%d %H:%M:%S"), self.action)
    }
}
