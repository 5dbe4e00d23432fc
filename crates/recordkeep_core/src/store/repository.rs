//! Predicate-based repository.

use crate::entity::{Entity, RecordId};
use crate::error::{StoreError, StoreResult};

/// An ordered list store searched by caller-supplied predicates.
///
/// Unlike [`KeyedStore`](crate::KeyedStore), a `Repository<T>` does not key
/// its entries and does not reject duplicates. Lookups and removals take a
/// predicate; the first match in insertion order wins. This suits records that
/// are searched by arbitrary fields, such as a name substring.
///
/// # Example
///
/// ```rust
/// use recordkeep_core::Repository;
///
/// let mut names = Repository::new();
/// names.add("Ama Mensah".to_string());
/// names.add("Kofi Boateng".to_string());
///
/// let found = names.find(|n| n.contains("Kofi")).unwrap();
/// assert_eq!(found, "Kofi Boateng");
///
/// assert!(names.remove(|n| n.starts_with("Ama")));
/// assert_eq!(names.count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Repository<T> {
    items: Vec<T>,
}

impl<T> Default for Repository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Repository<T> {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Returns the first item matching `predicate`, if any.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    /// Removes the first item matching `predicate`.
    ///
    /// Returns `true` if an item was removed.
    pub fn remove<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self.items.iter().position(|item| predicate(item)) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the number of items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> Repository<T> {
    /// Returns copies of all items in insertion order.
    #[must_use]
    pub fn get_all(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Returns a copy of the first item matching `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoMatch`] if nothing matches.
    pub fn get_by<P>(&self, predicate: P) -> StoreResult<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.find(predicate).cloned().ok_or(StoreError::NoMatch)
    }

    /// Returns copies of every item matching `predicate`, in insertion order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }
}

impl<T: Entity> Repository<T> {
    /// Returns a copy of the first item whose id equals `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no item has this id.
    pub fn get_by_id(&self, id: RecordId) -> StoreResult<T> {
        self.find(|item| item.id() == id)
            .cloned()
            .ok_or(StoreError::not_found(id))
    }

    /// Removes the first item whose id equals `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no item has this id.
    pub fn remove_by_id(&mut self, id: RecordId) -> StoreResult<()> {
        if self.remove(|item| item.id() == id) {
            Ok(())
        } else {
            Err(StoreError::not_found(id))
        }
    }
}

impl<T> FromIterator<T> for Repository<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Repository<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
