//! File-based snapshot backend.

use crate::backend::SnapshotBackend;
use crate::error::{StorageError, StorageResult};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A snapshot backend storing one file on disk.
///
/// The file is not opened until a read or write is requested, and every
/// handle is scoped to the call that opened it, so it is closed on every exit
/// path. A missing file reads as "no snapshot".
///
/// # Durability
///
/// - `write_snapshot` truncates the file, writes, and flushes
/// - with `sync_on_write` enabled (the default) it also calls
///   `File::sync_all()` before returning
///
/// # Example
///
/// ```no_run
/// use recordkeep_storage::{FileBackend, SnapshotBackend};
///
/// let mut backend = FileBackend::new("inventory_data.json").create_dirs(true);
/// backend.write_snapshot(b"[]").unwrap();
/// assert!(backend.exists().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
    create_dirs: bool,
    sync_on_write: bool,
}

impl FileBackend {
    /// Creates a backend for the file at `path`.
    ///
    /// Nothing is touched on disk until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_dirs: false,
            sync_on_write: true,
        }
    }

    /// Sets whether missing parent directories are created on write.
    #[must_use]
    pub fn create_dirs(mut self, value: bool) -> Self {
        self.create_dirs = value;
        self
    }

    /// Sets whether writes are synced to disk before returning.
    #[must_use]
    pub fn sync_on_write(mut self, value: bool) -> Self {
        self.sync_on_write = value;
        self
    }

    /// Returns the path to the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::io(&self.path, source)
    }
}

impl SnapshotBackend for FileBackend {
    fn read_snapshot(&self) -> StorageResult<Option<Vec<u8>>> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), bytes = buffer.len(), "snapshot read");
        Ok(Some(buffer))
    }

    fn write_snapshot(&mut self, data: &[u8]) -> StorageResult<()> {
        if self.create_dirs {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
                }
            }
        }

        let mut file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        file.write_all(data).map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))?;
        if self.sync_on_write {
            file.sync_all().map_err(|e| self.io_error(e))?;
        }

        debug!(path = %self.path.display(), bytes = data.len(), "snapshot written");
        Ok(())
    }

    fn exists(&self) -> StorageResult<bool> {
        self.path.try_exists().map_err(|e| self.io_error(e))
    }

    fn remove_snapshot(&mut self) -> StorageResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
