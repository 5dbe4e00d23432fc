//! Snapshot backend trait definition.

use crate::error::StorageResult;

/// A store for a single whole-collection snapshot.
///
/// Snapshot backends are **opaque byte stores**. Callers serialize their
/// collection, hand the bytes to [`write_snapshot`](Self::write_snapshot), and
/// later get the same bytes back from [`read_snapshot`](Self::read_snapshot).
///
/// # Invariants
///
/// - `read_snapshot` returns `None` until a snapshot has been written
/// - `read_snapshot` returns exactly the bytes of the last successful write
/// - `write_snapshot` replaces the previous snapshot entirely
/// - Backends must be `Send + Sync` so they can be handed between threads
///
/// # Implementors
///
/// - [`super::InMemoryBackend`] - For testing
/// - [`super::FileBackend`] - For persistent storage
pub trait SnapshotBackend: Send + Sync {
    /// Reads the current snapshot.
    ///
    /// Returns `Ok(None)` if no snapshot exists. An absent snapshot is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot exists but cannot be read.
    fn read_snapshot(&self) -> StorageResult<Option<Vec<u8>>>;

    /// Replaces the snapshot with `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be written.
    fn write_snapshot(&mut self, data: &[u8]) -> StorageResult<()>;

    /// Returns `true` if a snapshot exists.
    ///
    /// # Errors
    ///
    /// Returns an error if existence cannot be determined.
    fn exists(&self) -> StorageResult<bool>;

    /// Removes the snapshot. Removing an absent snapshot succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot exists but cannot be removed.
    fn remove_snapshot(&mut self) -> StorageResult<()>;
}
