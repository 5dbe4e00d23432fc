//! Error types for log persistence.

use recordkeep_storage::StorageError;
use thiserror::Error;

/// Result type for log persistence steps.
pub type LogResult<T> = Result<T, LogError>;

/// Errors that can occur while saving or loading a log.
///
/// A [`PersistentLog`](crate::PersistentLog) never returns these directly;
/// they are carried inside a [`SaveReport`](crate::SaveReport) or
/// [`LoadReport`](crate::LoadReport).
#[derive(Debug, Error)]
pub enum LogError {
    /// The snapshot could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The entries could not be serialized.
    #[error("failed to encode log entries: {0}")]
    Encode(#[source] serde_json::Error),

    /// The snapshot is not a valid document of entries.
    #[error("malformed log snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}
