//! In-memory stores.
//!
//! Provides [`KeyedStore<T>`] for id-keyed records, [`Repository<T>`] for
//! predicate lookups, and [`SharedStore<T>`] for cross-thread access.

mod keyed;
mod repository;
mod shared;

pub use keyed::KeyedStore;
pub use repository::Repository;
pub use shared::SharedStore;
