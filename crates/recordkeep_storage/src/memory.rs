//! In-memory snapshot backend for testing.

use crate::backend::SnapshotBackend;
use crate::error::StorageResult;
use parking_lot::RwLock;

/// An in-memory snapshot backend.
///
/// Holds the snapshot in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Collections that never need to outlive the process
///
/// # Thread Safety
///
/// This backend is thread-safe and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use recordkeep_storage::{InMemoryBackend, SnapshotBackend};
///
/// let mut backend = InMemoryBackend::new();
/// backend.write_snapshot(b"first").unwrap();
/// backend.write_snapshot(b"second").unwrap();
/// assert_eq!(backend.read_snapshot().unwrap(), Some(b"second".to_vec()));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    snapshot: RwLock<Option<Vec<u8>>>,
}

impl InMemoryBackend {
    /// Creates a backend with no snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend holding a pre-existing snapshot.
    ///
    /// Useful for testing loads of malformed content.
    #[must_use]
    pub fn with_snapshot(data: impl Into<Vec<u8>>) -> Self {
        Self {
            snapshot: RwLock::new(Some(data.into())),
        }
    }

    /// Returns a copy of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.snapshot.read().clone()
    }
}

impl SnapshotBackend for InMemoryBackend {
    fn read_snapshot(&self) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.snapshot.read().clone())
    }

    fn write_snapshot(&mut self, data: &[u8]) -> StorageResult<()> {
        *self.snapshot.write() = Some(data.to_vec());
        Ok(())
    }

    fn exists(&self) -> StorageResult<bool> {
        Ok(self.snapshot.read().is_some())
    }

    fn remove_snapshot(&mut self) -> StorageResult<()> {
        self.snapshot.write().take();
        Ok(())
    }
}
