//! Log configuration.

use std::path::{Path, PathBuf};

/// File used when no path is configured.
pub const DEFAULT_LOG_FILE: &str = "inventory_data.json";

/// Configuration for a [`PersistentLog`](crate::PersistentLog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// File used by `save` and `load`.
    pub path: PathBuf,

    /// Whether to pretty-print the JSON document.
    pub pretty: bool,

    /// Whether to create missing parent directories on save.
    pub create_dirs: bool,

    /// Whether to sync the file to disk after every save.
    pub sync_on_save: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            pretty: true,
            create_dirs: true,
            sync_on_save: true,
        }
    }
}

impl LogConfig {
    /// Creates a configuration for the given file with default settings.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Sets the file used by `save` and `load`.
    #[must_use]
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    /// Sets whether to pretty-print the JSON document.
    #[must_use]
    pub const fn pretty(mut self, value: bool) -> Self {
        self.pretty = value;
        self
    }

    /// Sets whether to create missing parent directories on save.
    #[must_use]
    pub const fn create_dirs(mut self, value: bool) -> Self {
        self.create_dirs = value;
        self
    }

    /// Sets whether to sync the file after every save.
    #[must_use]
    pub const fn sync_on_save(mut self, value: bool) -> Self {
        self.sync_on_save = value;
        self
    }
}
