//! Outcomes of save and load operations.

use crate::error::LogError;

/// Outcome of saving a log.
#[derive(Debug)]
#[must_use = "a save can fail; inspect the report"]
pub enum SaveReport {
    /// All entries were written.
    Saved {
        /// Number of entries written.
        entries: usize,
        /// Size of the written document in bytes.
        bytes: usize,
    },
    /// Nothing usable was written. The in-memory log is unchanged.
    Failed(LogError),
}

impl SaveReport {
    /// Returns `true` if the save succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }

    /// Returns the failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&LogError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Saved { .. } => None,
        }
    }
}

/// Outcome of loading a log.
#[derive(Debug)]
#[must_use = "a load can fail; inspect the report"]
pub enum LoadReport {
    /// The log was replaced with the snapshot's entries.
    Loaded {
        /// Number of entries loaded.
        entries: usize,
    },
    /// No snapshot exists. The log is unchanged.
    Missing,
    /// The snapshot could not be read or decoded. The log was reset to empty.
    Failed(LogError),
}

impl LoadReport {
    /// Returns `true` unless the load failed.
    ///
    /// A missing snapshot is not a failure.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    /// Returns the failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&LogError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Loaded { .. } | Self::Missing => None,
        }
    }
}
