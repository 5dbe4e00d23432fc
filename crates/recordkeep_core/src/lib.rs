//! # recordkeep Core
//!
//! Entity contract and in-memory stores for recordkeep.
//!
//! This crate provides:
//! - [`Entity`] and [`Stocked`], the capabilities a stored record must have
//! - [`KeyedStore`], a map from [`RecordId`] to entity that rejects duplicate
//!   ids, reports missing ids, and keeps quantities non-negative
//! - [`Repository`], a list store whose lookups take a caller predicate
//! - [`SharedStore`], a [`KeyedStore`] behind a single lock for use across threads
//!
//! ## Example
//!
//! ```rust
//! use recordkeep_core::{Entity, KeyedStore, RecordId, StoreError};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Patient {
//!     id: RecordId,
//!     name: String,
//! }
//!
//! impl Entity for Patient {
//!     fn id(&self) -> RecordId {
//!         self.id
//!     }
//! }
//!
//! let mut store = KeyedStore::new();
//! store.add(Patient { id: RecordId::new(1), name: "Ama".into() }).unwrap();
//!
//! let duplicate = store.add(Patient { id: RecordId::new(1), name: "Kofi".into() });
//! assert!(matches!(duplicate, Err(StoreError::DuplicateKey { .. })));
//! assert_eq!(store.get_by_id(RecordId::new(1)).unwrap().name, "Ama");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod entity;
mod error;
mod store;

pub use entity::{Entity, QuantityToken, RecordId, Stocked};
pub use error::{StoreError, StoreResult};
pub use store::{KeyedStore, Repository, SharedStore};

/// Crate version, reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
