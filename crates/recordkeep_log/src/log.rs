//! Append-only log with best-effort persistence.

use crate::codec::{decode_entries, encode_entries};
use crate::config::LogConfig;
use crate::error::LogError;
use crate::report::{LoadReport, SaveReport};
use recordkeep_core::Entity;
use recordkeep_storage::{FileBackend, SnapshotBackend};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, error, warn};

/// An ordered, append-only sequence of entities with file persistence.
///
/// Unlike [`KeyedStore`](recordkeep_core::KeyedStore), `append` performs no
/// uniqueness check. The whole sequence can be written to a snapshot, or
/// replaced from one, at any time.
///
/// # Failure semantics
///
/// Saving and loading never fail to the caller. They return a
/// [`SaveReport`] / [`LoadReport`] and log failures at `error` level:
/// - a failed save leaves the in-memory sequence untouched
/// - loading a missing snapshot leaves the sequence untouched
/// - loading an unreadable or malformed snapshot resets the sequence to empty
#[derive(Debug, Clone)]
pub struct PersistentLog<T> {
    entries: Vec<T>,
    config: LogConfig,
}

impl<T> Default for PersistentLog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            config: LogConfig::default(),
        }
    }
}

impl<T> PersistentLog<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    /// Creates an empty log using `config`.
    #[must_use]
    pub fn new(config: LogConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
        }
    }

    /// Returns the log's configuration.
    #[must_use]
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Appends an entity to the end of the log.
    pub fn append(&mut self, entity: T) {
        self.entries.push(entity);
    }

    /// Returns copies of all entries in append order.
    #[must_use]
    pub fn get_all(&self) -> Vec<T> {
        self.entries.clone()
    }

    /// Iterates over entries in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Saves to the configured file.
    pub fn save(&self) -> SaveReport {
        self.save_to_file(&self.config.path)
    }

    /// Loads from the configured file.
    pub fn load(&mut self) -> LoadReport {
        let path = self.config.path.clone();
        self.load_from_file(&path)
    }

    /// Writes every entry to `path`, overwriting the file.
    pub fn save_to_file(&self, path: &Path) -> SaveReport {
        let mut backend = self.file_backend(path);
        let report = self.save_to(&mut backend);
        if let SaveReport::Failed(err) = &report {
            error!(path = %path.display(), error = %err, "error saving log to file");
        }
        report
    }

    /// Replaces the entries with the contents of `path`.
    ///
    /// A missing file leaves the entries unchanged.
    pub fn load_from_file(&mut self, path: &Path) -> LoadReport {
        let backend = self.file_backend(path);
        let report = self.load_from(&backend);
        match &report {
            LoadReport::Failed(err) => {
                error!(path = %path.display(), error = %err, "error loading log from file");
            }
            LoadReport::Missing => {
                debug!(path = %path.display(), "no saved log; keeping current entries");
            }
            LoadReport::Loaded { .. } => {}
        }
        report
    }

    /// Writes every entry to `backend`.
    pub fn save_to<B>(&self, backend: &mut B) -> SaveReport
    where
        B: SnapshotBackend + ?Sized,
    {
        let bytes = match encode_entries(&self.entries, self.config.pretty) {
            Ok(bytes) => bytes,
            Err(err) => return SaveReport::Failed(err),
        };

        match backend.write_snapshot(&bytes) {
            Ok(()) => {
                debug!(entries = self.entries.len(), bytes = bytes.len(), "log saved");
                SaveReport::Saved {
                    entries: self.entries.len(),
                    bytes: bytes.len(),
                }
            }
            Err(err) => SaveReport::Failed(LogError::from(err)),
        }
    }

    /// Replaces the entries with the snapshot held by `backend`.
    ///
    /// An absent snapshot leaves the entries unchanged. A snapshot that cannot
    /// be read or decoded resets the log to empty.
    pub fn load_from<B>(&mut self, backend: &B) -> LoadReport
    where
        B: SnapshotBackend + ?Sized,
    {
        let bytes = match backend.read_snapshot() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return LoadReport::Missing,
            Err(err) => {
                self.reset_after_failure();
                return LoadReport::Failed(LogError::from(err));
            }
        };

        match decode_entries(&bytes) {
            Ok(entries) => {
                self.entries = entries;
                debug!(entries = self.entries.len(), "log loaded");
                LoadReport::Loaded {
                    entries: self.entries.len(),
                }
            }
            Err(err) => {
                self.reset_after_failure();
                LoadReport::Failed(err)
            }
        }
    }

    fn reset_after_failure(&mut self) {
        if !self.entries.is_empty() {
            warn!(discarded = self.entries.len(), "resetting log after failed load");
        }
        self.entries.clear();
    }

    fn file_backend(&self, path: &Path) -> FileBackend {
        FileBackend::new(path)
            .create_dirs(self.config.create_dirs)
            .sync_on_write(self.config.sync_on_save)
    }
}

impl<T> Extend<T> for PersistentLog<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a PersistentLog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
