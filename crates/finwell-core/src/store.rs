//! Single-slot store for the last-rendered chart artifact
//!
//! The legacy service wrote every chart to one shared file on disk, so
//! concurrent requests raced on the write and a reader could observe a
//! half-written image. The slot here keeps the same observable contract
//! (one artifact, last writer wins, empty until the first render) while
//! the atomic `Arc` swap rules out torn reads.

use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::error::Result;

/// Well-known artifact name, used as the download filename
pub const ARTIFACT_FILENAME: &str = "spending_distribution.png";

/// A rendered spending chart: encoded PNG bytes plus the filename the
/// artifact is served under.
#[derive(Debug, Clone)]
pub struct ChartArtifact {
    pub filename: String,
    pub png: Vec<u8>,
}

impl ChartArtifact {
    pub fn new(png: Vec<u8>) -> Self {
        Self {
            filename: ARTIFACT_FILENAME.to_string(),
            png,
        }
    }

    /// Persist the encoded PNG to disk (the CLI scoring path).
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.png)?;
        Ok(())
    }
}

/// Process-wide single-slot chart store, injected via server state.
#[derive(Debug, Default)]
pub struct GraphStore {
    slot: RwLock<Option<Arc<ChartArtifact>>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored artifact with a freshly rendered one.
    pub fn put(&self, artifact: ChartArtifact) {
        let mut slot = self.slot.write().expect("graph store lock poisoned");
        *slot = Some(Arc::new(artifact));
    }

    /// The most recently stored artifact, or `None` before the first
    /// render in this process's lifetime.
    pub fn latest(&self) -> Option<Arc<ChartArtifact>> {
        self.slot.read().expect("graph store lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_until_first_put() {
        let store = GraphStore::new();
        assert!(store.latest().is_none());
    }

    #[test]
    fn test_last_writer_wins() {
        let store = GraphStore::new();
        store.put(ChartArtifact::new(vec![1, 2, 3]));
        store.put(ChartArtifact::new(vec![4, 5, 6]));

        let latest = store.latest().unwrap();
        assert_eq!(latest.png, vec![4, 5, 6]);
        assert_eq!(latest.filename, ARTIFACT_FILENAME);
    }

    #[test]
    fn test_readers_keep_their_snapshot() {
        let store = GraphStore::new();
        store.put(ChartArtifact::new(vec![1]));
        let snapshot = store.latest().unwrap();

        store.put(ChartArtifact::new(vec![2]));

        // The old handle is still intact; only new readers see the swap
        assert_eq!(snapshot.png, vec![1]);
        assert_eq!(store.latest().unwrap().png, vec![2]);
    }

    #[test]
    fn test_write_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ARTIFACT_FILENAME);

        let artifact = ChartArtifact::new(vec![9, 9, 9]);
        artifact.write_to(&path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), vec![9, 9, 9]);
    }
}
