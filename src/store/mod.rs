//! Artifact store
//!
//! Persists scored events one file per event at a deterministic path:
//! `<root>/<partition>/<decimal event id>` (no padding, no extension).
//! Path existence is the **only** staleness signal — no content hashing, no
//! timestamp comparison — so an artifact built by a stale classifier is
//! indistinguishable from a fresh one unless the caller forces overwrite.
//!
//! Writes go straight to the final path. There is no write-to-temp-then-
//! rename step, so a crash mid-write can leave a partial artifact behind;
//! single-process, single-pass dataset construction is the supported mode.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::event::{EventId, Partition, ScoredEvent};
use crate::{Error, Result};

/// Filesystem store for scored event artifacts.
///
/// ## Example
///
/// ```rust,no_run
/// use edgescore::event::{EventId, Partition};
/// use edgescore::store::ArtifactStore;
///
/// let store = ArtifactStore::new("output/gnn");
/// if !store.exists(Partition::Test, EventId::new(42)) {
///     // score the event, then store.write(...)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `root`. No directories are touched until
    /// [`ensure_layout`](Self::ensure_layout) or a write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the output root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Deterministic artifact path for `(partition, event_id)`.
    ///
    /// Two events with the same partition and id always map to the same
    /// path; this is the sole identity check used for idempotence.
    #[must_use]
    pub fn path(&self, partition: Partition, event_id: EventId) -> PathBuf {
        self.root
            .join(partition.as_str())
            .join(event_id.to_string())
    }

    /// Check whether the artifact for `(partition, event_id)` exists.
    #[must_use]
    pub fn exists(&self, partition: Partition, event_id: EventId) -> bool {
        self.path(partition, event_id).exists()
    }

    /// Create the output root and all partition directories.
    ///
    /// # Errors
    ///
    /// [`Error::Storage`] if any directory cannot be created.
    pub fn ensure_layout(&self) -> Result<()> {
        for partition in Partition::ALL {
            let dir = self.root.join(partition.as_str());
            fs::create_dir_all(&dir).map_err(|e| {
                Error::Storage(format!("failed to create {}: {e}", dir.display()))
            })?;
        }
        Ok(())
    }

    /// Serialize a scored event to its deterministic path.
    ///
    /// Overwrites unconditionally when called — the skip decision belongs
    /// to the caller. Creates the partition directory on first use.
    ///
    /// # Errors
    ///
    /// [`Error::Storage`] for directory or file creation failures,
    /// [`Error::Serialize`] if the record cannot be serialized.
    pub fn write(
        &self,
        partition: Partition,
        event_id: EventId,
        scored: &ScoredEvent,
    ) -> Result<()> {
        let path = self.path(partition, event_id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let file = File::create(&path).map_err(|e| {
            Error::Storage(format!("failed to create artifact {}: {e}", path.display()))
        })?;
        serde_json::to_writer(BufWriter::new(file), scored)?;
        Ok(())
    }

    /// Read a previously written artifact back.
    ///
    /// # Errors
    ///
    /// [`Error::Storage`] if the artifact cannot be opened,
    /// [`Error::Serialize`] if it cannot be deserialized.
    pub fn read(&self, partition: Partition, event_id: EventId) -> Result<ScoredEvent> {
        let path = self.path(partition, event_id);
        let file = File::open(&path).map_err(|e| {
            Error::Storage(format!("failed to open artifact {}: {e}", path.display()))
        })?;
        let scored = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{arr1, arr2};
    use tempfile::TempDir;

    use super::*;
    use crate::event::EventGraph;

    fn sample_scored() -> ScoredEvent {
        let event = EventGraph::new(
            "data/event0000000042",
            arr2(&[[0], [1]]),
            arr2(&[[1.0], [2.0]]),
            arr1(&[1.0]),
        );
        ScoredEvent::new(event, arr1(&[0.9, 0.8]))
    }

    #[test]
    fn test_path_is_deterministic_and_unpadded() {
        let store = ArtifactStore::new("/out");
        let path = store.path(Partition::Val, EventId::new(42));
        assert_eq!(path, PathBuf::from("/out/val/42"));
        assert_eq!(path, store.path(Partition::Val, EventId::new(42)));
    }

    #[test]
    fn test_write_then_exists_then_read() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(dir.path());
        let id = EventId::new(42);

        assert!(!store.exists(Partition::Test, id));
        store.write(Partition::Test, id, &sample_scored()).unwrap();
        assert!(store.exists(Partition::Test, id));

        let back = store.read(Partition::Test, id).unwrap();
        assert_eq!(back, sample_scored());
    }

    #[test]
    fn test_ensure_layout_creates_partition_dirs() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(dir.path().join("nested/out"));
        store.ensure_layout().unwrap();
        for partition in Partition::ALL {
            assert!(dir.path().join("nested/out").join(partition.as_str()).is_dir());
        }
    }

    #[test]
    fn test_write_overwrites_unconditionally() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(dir.path());
        let id = EventId::new(7);

        store.write(Partition::Train, id, &sample_scored()).unwrap();
        let other = ScoredEvent::new(
            EventGraph::new(
                "data/event0000000007",
                arr2(&[[1], [0]]),
                arr2(&[[3.0], [4.0]]),
                arr1(&[0.0]),
            ),
            arr1(&[0.1, 0.2]),
        );
        store.write(Partition::Train, id, &other).unwrap();
        assert_eq!(store.read(Partition::Train, id).unwrap(), other);
    }
}
