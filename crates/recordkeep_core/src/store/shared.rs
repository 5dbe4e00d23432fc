//! Thread-safe wrapper around [`KeyedStore`].

use crate::entity::{Entity, RecordId, Stocked};
use crate::error::StoreResult;
use crate::store::KeyedStore;
use parking_lot::RwLock;
use std::sync::Arc;

/// A [`KeyedStore`] shared across threads behind one lock.
///
/// Cloning a `SharedStore` produces another handle to the same store. Each
/// operation holds the lock for the duration of the call, so the store's
/// invariants hold across threads exactly as they do for a single owner.
///
/// # Thread Safety
///
/// `SharedStore<T>` is `Send + Sync` when `T` is `Send + Sync`.
#[derive(Debug)]
pub struct SharedStore<T: Entity> {
    inner: Arc<RwLock<KeyedStore<T>>>,
}

impl<T: Entity> Clone for SharedStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Entity> Default for SharedStore<T> {
    fn default() -> Self {
        Self::new(KeyedStore::new())
    }
}

impl<T: Entity> SharedStore<T> {
    /// Wraps an existing store.
    #[must_use]
    pub fn new(store: KeyedStore<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// See [`KeyedStore::add`].
    pub fn add(&self, entity: T) -> StoreResult<()> {
        self.inner.write().add(entity)
    }

    /// See [`KeyedStore::get_by_id`].
    pub fn get_by_id(&self, id: RecordId) -> StoreResult<T> {
        self.inner.read().get_by_id(id)
    }

    /// See [`KeyedStore::remove`].
    pub fn remove(&self, id: RecordId) -> StoreResult<T> {
        self.inner.write().remove(id)
    }

    /// See [`KeyedStore::get_all`].
    #[must_use]
    pub fn get_all(&self) -> Vec<T> {
        self.inner.read().get_all()
    }

    /// See [`KeyedStore::count`].
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.read().count()
    }

    /// See [`KeyedStore::contains`].
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.inner.read().contains(id)
    }

    /// Runs `f` with shared access to the underlying store.
    pub fn read<R>(&self, f: impl FnOnce(&KeyedStore<T>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the underlying store.
    ///
    /// Use this to make several operations atomic with respect to other
    /// handles.
    pub fn write<R>(&self, f: impl FnOnce(&mut KeyedStore<T>) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl<T: Stocked> SharedStore<T> {
    /// See [`KeyedStore::update_quantity`].
    pub fn update_quantity(&self, id: RecordId, new_quantity: i64) -> StoreResult<()> {
        self.inner.write().update_quantity(id, new_quantity)
    }

    /// See [`KeyedStore::increase_quantity`]. The read and the write happen
    /// under one lock, so concurrent increases are not lost.
    pub fn increase_quantity(&self, id: RecordId, delta: i64) -> StoreResult<u32> {
        self.inner.write().increase_quantity(id, delta)
    }
}
