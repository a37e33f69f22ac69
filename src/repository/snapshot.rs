//! Whole-state snapshot persisted as a single JSON document

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::{
    collections::{CategoryNode, RelationGraph},
    error::AppResult,
    models::{Book, HistoryEntry, LoanRequest, User},
};

/// Serialized copy of every container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub users: Vec<User>,
    /// Oldest entry first
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub categories: Option<CategoryNode>,
    #[serde(default)]
    pub relations: RelationGraph,
    /// Pending requests in arrival order
    #[serde(default)]
    pub loan_requests: Vec<LoanRequest>,
}

impl Snapshot {
    /// Read a snapshot from `path`.
    ///
    /// A missing file yields `Ok(None)`. A file that cannot be decoded is an
    /// error.
    pub fn load(path: &Path) -> AppResult<Option<Self>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No snapshot at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
        tracing::info!(
            "Loaded snapshot from {}: {} books, {} users, {} history entries",
            path.display(),
            snapshot.books.len(),
            snapshot.users.len(),
            snapshot.history.len()
        );
        Ok(Some(snapshot))
    }

    /// Write the snapshot to `path`, replacing any previous one.
    ///
    /// The document is written to a sibling temporary file and renamed into
    /// place, so a failed save leaves the old snapshot intact.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = temp_path_for(path);
        let json = serde_json::to_vec_pretty(self)?;

        // Any failure past this point must not leave the temporary file behind
        if let Err(e) = write_synced(&tmp_path, &json).and_then(|()| fs::rename(&tmp_path, path)) {
            tracing::warn!("Failed to save snapshot to {}: {}", path.display(), e);
            discard_temp(&tmp_path);
            return Err(e.into());
        }

        tracing::info!("Saved snapshot to {}", path.display());
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn discard_temp(tmp_path: &Path) {
    match fs::remove_file(tmp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(
            "Failed to remove temporary snapshot {}: {}",
            tmp_path.display(),
            e
        ),
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "snapshot".into());
    name.push(".tmp");
    path.with_file_name(name)
}
