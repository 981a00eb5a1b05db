//! Persisted import store: a versioned JSON blob on disk
//!
//! The store is the single aggregate root for everything imported. It is
//! loaded whole, mutated in memory, and written back whole; callers own
//! that read-modify-write sequence and there are no partial or merge
//! writes. A corrupted, absent, or version-mismatched blob loads as an
//! empty store rather than an error, so a bad file can never wedge the
//! importer.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::app::models::ImportStore;
use crate::constants::STORE_SCHEMA_VERSION;
use crate::{Error, Result};

/// Handle to the on-disk store blob
#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    /// Create a handle for the blob at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the blob on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted store
    ///
    /// An absent, unreadable, schema-mismatched, or unparseable blob yields
    /// a fresh empty store. Corruption is logged but never surfaced.
    pub fn load(&self) -> ImportStore {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) => {
                debug!(
                    "No persisted store at {}: {}",
                    self.path.display(),
                    error
                );
                return ImportStore::empty();
            }
        };

        match serde_json::from_str::<ImportStore>(&raw) {
            Ok(store) if store.version == STORE_SCHEMA_VERSION => {
                debug!(
                    "Loaded {} meets from {}",
                    store.meets.len(),
                    self.path.display()
                );
                store
            }
            Ok(store) => {
                warn!(
                    "Discarding persisted store with unsupported version {}",
                    store.version
                );
                ImportStore::empty()
            }
            Err(error) => {
                warn!("Discarding unparseable persisted store: {}", error);
                ImportStore::empty()
            }
        }
    }

    /// Overwrite the persisted blob with the full store
    ///
    /// The parent directory is created on demand. The write is a verbatim
    /// full-store replacement, never a merge.
    pub fn save(&self, store: &ImportStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|error| {
                Error::io(
                    format!("Failed to create store directory {}", parent.display()),
                    error,
                )
            })?;
        }

        let encoded = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, encoded).map_err(|error| {
            Error::io(
                format!("Failed to write store {}", self.path.display()),
                error,
            )
        })?;

        debug!(
            "Saved {} meets to {}",
            store.meets.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Remove the persisted blob entirely
    ///
    /// An already-absent blob counts as success.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed persisted store at {}", self.path.display());
                Ok(())
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(Error::io(
                format!("Failed to remove store {}", self.path.display()),
                error,
            )),
        }
    }
}

/// Aggregate counts over a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StoreSummary {
    /// Number of imported meets
    pub meets: usize,

    /// Total performances across all meets
    pub performances: usize,

    /// Distinct athlete identities across all meets
    pub athletes: usize,
}

/// Count meets, performances, and distinct athlete identities
pub fn summarize(store: &ImportStore) -> StoreSummary {
    let performances = store
        .meets
        .iter()
        .map(|meet| meet.performances.len())
        .sum();

    let athletes: HashSet<&str> = store
        .meets
        .iter()
        .flat_map(|meet| {
            meet.performances
                .iter()
                .map(|performance| performance.athlete_id.as_str())
        })
        .collect();

    StoreSummary {
        meets: store.meets.len(),
        performances,
        athletes: athletes.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{MarkKind, Meet, Performance};
    use chrono::Utc;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> StoreFile {
        StoreFile::new(dir.path().join("imports.json"))
    }

    fn performance(athlete_id: &str, event: &str) -> Performance {
        Performance {
            athlete_id: athlete_id.to_string(),
            athlete_first: "Sam".to_string(),
            athlete_last: "Bell".to_string(),
            event_name: event.to_string(),
            mark_raw: "12.84".to_string(),
            mark_value: Some(12.84),
            mark_kind: MarkKind::Distance,
            gender: None,
            grade: None,
            team: None,
        }
    }

    fn meet_with(id: &str, performances: Vec<Performance>) -> Meet {
        Meet {
            id: id.to_string(),
            name: "Test Meet".to_string(),
            date: None,
            location: None,
            season: None,
            source: None,
            imported_at: Utc::now(),
            performances,
        }
    }

    #[test]
    fn test_load_missing_file_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let store_file = store_in(&dir);

        let store = store_file.load();
        assert_eq!(store, ImportStore::empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store_file = store_in(&dir);

        let mut store = ImportStore::empty();
        store
            .meets
            .push(meet_with("test-meet-undated-0000", vec![performance("sam-bell", "100m")]));

        store_file.save(&store).unwrap();
        let reloaded = store_file.load();
        assert_eq!(reloaded, store);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store_file = StoreFile::new(dir.path().join("nested/deeper/imports.json"));

        store_file.save(&ImportStore::empty()).unwrap();
        assert!(store_file.path().exists());
    }

    #[test]
    fn test_version_mismatch_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let store_file = store_in(&dir);

        std::fs::write(store_file.path(), r#"{"version": 2, "meets": []}"#).unwrap();
        assert_eq!(store_file.load(), ImportStore::empty());
    }

    #[test]
    fn test_invalid_json_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let store_file = store_in(&dir);

        std::fs::write(store_file.path(), "{not json").unwrap();
        assert_eq!(store_file.load(), ImportStore::empty());
    }

    #[test]
    fn test_wrong_shape_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let store_file = store_in(&dir);

        std::fs::write(store_file.path(), r#"{"version": 1, "meets": "nope"}"#).unwrap();
        assert_eq!(store_file.load(), ImportStore::empty());
    }

    #[test]
    fn test_clear_removes_blob_and_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        let store_file = store_in(&dir);

        store_file.save(&ImportStore::empty()).unwrap();
        assert!(store_file.path().exists());

        store_file.clear().unwrap();
        assert!(!store_file.path().exists());

        // Clearing again is still fine.
        store_file.clear().unwrap();
    }

    #[test]
    fn test_summarize_counts_distinct_athletes_across_meets() {
        let mut store = ImportStore::empty();
        store.meets.push(meet_with(
            "meet-b",
            vec![
                performance("sam-bell-central", "100m"),
                performance("jordan-avery-central", "200m"),
            ],
        ));
        store.meets.push(meet_with(
            "meet-a",
            vec![performance("sam-bell-central", "200m")],
        ));

        let summary = summarize(&store);
        assert_eq!(summary.meets, 2);
        assert_eq!(summary.performances, 3);
        assert_eq!(summary.athletes, 2);
    }

    #[test]
    fn test_summarize_empty_store() {
        let summary = summarize(&ImportStore::empty());
        assert_eq!(
            summary,
            StoreSummary {
                meets: 0,
                performances: 0,
                athletes: 0
            }
        );
    }
}
