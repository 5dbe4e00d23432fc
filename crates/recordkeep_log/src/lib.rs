//! # recordkeep Log
//!
//! An ordered, append-only record log with whole-collection JSON persistence.
//!
//! [`PersistentLog<T>`] keeps entries in append order and can write them all
//! to a file, or replace them all from a file, at any time. Persistence is
//! best-effort: failures never propagate to the caller. Each save or load
//! returns a [`SaveReport`] or [`LoadReport`] describing the outcome, and
//! failures are also reported through `tracing`.
//!
//! ## Example
//!
//! ```rust
//! use recordkeep_core::{Entity, RecordId};
//! use recordkeep_log::{LogConfig, PersistentLog};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct Item {
//!     id: RecordId,
//!     name: String,
//! }
//!
//! impl Entity for Item {
//!     fn id(&self) -> RecordId {
//!         self.id
//!     }
//! }
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("inventory.json");
//!
//! let mut log = PersistentLog::new(LogConfig::new(&path));
//! log.append(Item { id: RecordId::new(1), name: "Rice".into() });
//! assert!(log.save().is_ok());
//!
//! let mut restored: PersistentLog<Item> = PersistentLog::new(LogConfig::new(&path));
//! assert!(restored.load().is_ok());
//! assert_eq!(restored.get_all(), log.get_all());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod codec;
mod config;
mod error;
mod log;
mod report;

pub use codec::{decode_entries, encode_entries};
pub use config::{LogConfig, DEFAULT_LOG_FILE};
pub use error::{LogError, LogResult};
pub use log::PersistentLog;
pub use report::{LoadReport, SaveReport};
