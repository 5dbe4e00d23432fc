//! # recordkeep Storage
//!
//! Snapshot backend trait and implementations for recordkeep.
//!
//! A snapshot backend holds **one opaque byte blob**: the whole serialized
//! contents of a collection. Writing replaces the previous snapshot; reading
//! returns it, or `None` when nothing has been written yet. Backends do not
//! interpret the bytes.
//!
//! ## Available Backends
//!
//! - [`InMemoryBackend`] - For testing and ephemeral storage
//! - [`FileBackend`] - One file on disk, written through scoped handles
//!
//! ## Example
//!
//! ```rust
//! use recordkeep_storage::{InMemoryBackend, SnapshotBackend};
//!
//! let mut backend = InMemoryBackend::new();
//! assert_eq!(backend.read_snapshot().unwrap(), None);
//!
//! backend.write_snapshot(b"[]").unwrap();
//! assert_eq!(backend.read_snapshot().unwrap(), Some(b"[]".to_vec()));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::SnapshotBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
