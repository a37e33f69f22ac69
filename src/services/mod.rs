//! Library session: the orchestrator over all containers
//!
//! Operations are grouped by concern into the submodules below, each adding
//! an `impl Library` block. Every mutating operation validates first, then
//! mutates one or more containers, then records a history entry.

pub mod catalog;
pub mod categories;
pub mod history;
pub mod loans;
pub mod relations;
pub mod users;

use std::path::Path;

use crate::{
    config::LibraryConfig,
    error::AppResult,
    models::HistoryEntry,
    repository::{Repository, Snapshot},
};

/// One library session. Construct it empty or from a snapshot, then save it
/// back explicitly.
#[derive(Debug, Clone)]
pub struct Library {
    repository: Repository,
}

impl Library {
    /// Empty session whose category tree is rooted at `root_category`
    pub fn new(root_category: &str) -> Self {
        Self {
            repository: Repository::new(root_category),
        }
    }

    pub fn with_config(config: &LibraryConfig) -> Self {
        Self::new(&config.root_category)
    }

    /// Open a session from the snapshot at `path`, or an empty one if no
    /// snapshot exists yet. A snapshot that fails to decode is an error.
    pub fn load(path: &Path, config: &LibraryConfig) -> AppResult<Self> {
        let repository = match Snapshot::load(path)? {
            Some(snapshot) => Repository::from_snapshot(snapshot, &config.root_category),
            None => {
                tracing::info!("Starting with an empty library");
                Repository::new(&config.root_category)
            }
        };
        Ok(Self { repository })
    }

    /// Persist the full state to `path`, overwriting any previous snapshot
    pub fn save(&self, path: &Path) -> AppResult<()> {
        self.snapshot().save(path)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.repository.to_snapshot()
    }

    pub fn from_snapshot(snapshot: Snapshot, config: &LibraryConfig) -> Self {
        Self {
            repository: Repository::from_snapshot(snapshot, &config.root_category),
        }
    }

    fn log(&mut self, action: impl Into<String>) {
        self.repository.history.push(HistoryEntry::new(action));
    }
}
