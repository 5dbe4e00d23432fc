//! Id-keyed store implementation.

use crate::entity::{Entity, QuantityToken, RecordId, Stocked};
use crate::error::{StoreError, StoreResult};
use std::collections::HashMap;
use tracing::trace;

/// An in-memory map from [`RecordId`] to entity.
///
/// `KeyedStore<T>` is the sole authority on which records of type `T` exist.
/// It enforces:
/// - No two entries share an id (`add` fails with [`StoreError::DuplicateKey`])
/// - Lookups, updates and removals of an absent id fail with
///   [`StoreError::NotFound`]
/// - Quantities are never negative (`update_quantity` fails with
///   [`StoreError::InvalidQuantity`] before checking existence)
///
/// Listing preserves insertion order. Values handed out by `get_by_id` and
/// `get_all` are independent copies.
///
/// # Example
///
/// ```rust
/// use recordkeep_core::{Entity, KeyedStore, QuantityToken, RecordId, Stocked, StoreError};
///
/// #[derive(Debug, Clone)]
/// struct Crate { id: RecordId, quantity: u32 }
///
/// impl Entity for Crate {
///     fn id(&self) -> RecordId { self.id }
/// }
///
/// impl Stocked for Crate {
///     fn quantity(&self) -> u32 { self.quantity }
///     fn set_quantity(&mut self, quantity: u32, _: QuantityToken) { self.quantity = quantity; }
/// }
///
/// let mut store = KeyedStore::new();
/// store.add(Crate { id: RecordId::new(1), quantity: 4 }).unwrap();
///
/// store.update_quantity(RecordId::new(1), 10).unwrap();
/// assert_eq!(store.get_by_id(RecordId::new(1)).unwrap().quantity(), 10);
///
/// // Negative quantities are rejected even for ids that do not exist.
/// let err = store.update_quantity(RecordId::new(99), -1).unwrap_err();
/// assert!(matches!(err, StoreError::InvalidQuantity { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct KeyedStore<T: Entity> {
    entries: HashMap<RecordId, T>,
    /// Ids in insertion order.
    order: Vec<RecordId>,
}

impl<T: Entity> Default for KeyedStore<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Entity> KeyedStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Builds a store from a sequence of entities, adding them in order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] at the first repeated id.
    pub fn try_from_entities<I>(entities: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut store = Self::new();
        for entity in entities {
            store.add(entity)?;
        }
        Ok(store)
    }

    /// Adds an entity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if an entity with the same id is
    /// already stored. The existing entry is left untouched.
    pub fn add(&mut self, entity: T) -> StoreResult<()> {
        let id = entity.id();
        if self.entries.contains_key(&id) {
            return Err(StoreError::duplicate_key(id));
        }

        self.entries.insert(id, entity);
        self.order.push(id);
        trace!(%id, count = self.entries.len(), "record added");
        Ok(())
    }

    /// Returns a reference to the entity with this id, if stored.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.entries.get(&id)
    }

    /// Returns a copy of the entity with this id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is absent.
    pub fn get_by_id(&self, id: RecordId) -> StoreResult<T> {
        self.get(id).cloned().ok_or(StoreError::not_found(id))
    }

    /// Removes the entity with this id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is absent.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<T> {
        let entity = self
            .entries
            .remove(&id)
            .ok_or(StoreError::not_found(id))?;
        self.order.retain(|existing| *existing != id);
        trace!(%id, count = self.entries.len(), "record removed");
        Ok(entity)
    }

    /// Returns copies of all entities in insertion order.
    #[must_use]
    pub fn get_all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns the number of stored entities.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if an entity with this id is stored.
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Iterates over stored ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.order.iter().copied()
    }

    /// Iterates over stored entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Returns the first entity, in insertion order, matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|entity| predicate(entity))
    }

    /// Removes every entity.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl<T: Stocked> KeyedStore<T> {
    /// Sets the quantity of a stored entity in place.
    ///
    /// The quantity is validated before the id is looked up, so a negative
    /// value against a missing id reports [`StoreError::InvalidQuantity`].
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidQuantity`] if `new_quantity` is negative or does
    ///   not fit in a `u32`
    /// - [`StoreError::NotFound`] if the id is absent
    pub fn update_quantity(&mut self, id: RecordId, new_quantity: i64) -> StoreResult<()> {
        let quantity =
            u32::try_from(new_quantity).map_err(|_| StoreError::invalid_quantity(new_quantity))?;

        let entity = self
            .entries
            .get_mut(&id)
            .ok_or(StoreError::not_found(id))?;
        entity.set_quantity(quantity, QuantityToken::new());
        trace!(%id, quantity, "quantity updated");
        Ok(())
    }

    /// Adds `delta` to the quantity of a stored entity and returns the new
    /// quantity. A negative `delta` takes stock away.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the id is absent
    /// - [`StoreError::InvalidQuantity`] if the result would be negative or
    ///   would not fit in a `u32`; the stored quantity is left unchanged
    pub fn increase_quantity(&mut self, id: RecordId, delta: i64) -> StoreResult<u32> {
        let current = self
            .entries
            .get(&id)
            .map(Stocked::quantity)
            .ok_or(StoreError::not_found(id))?;

        let target = i64::from(current)
            .checked_add(delta)
            .ok_or(StoreError::invalid_quantity(delta))?;
        let quantity =
            u32::try_from(target).map_err(|_| StoreError::invalid_quantity(target))?;
        self.update_quantity(id, i64::from(quantity))?;
        Ok(quantity)
    }

    /// Sum of the quantities of all stored entities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.entries
            .values()
            .map(|entity| u64::from(entity.quantity()))
            .sum()
    }
}

impl<'a, T: Entity> IntoIterator for &'a KeyedStore<T> {
    type Item = &'a T;
    type IntoIter = Box<dyn Iterator<Item = &'a T> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::Widget;
    use proptest::prelude::*;

    fn id(value: i32) -> RecordId {
        RecordId::new(value)
    }

    #[test]
    fn new_store_is_empty() {
        let store: KeyedStore<Widget> = KeyedStore::new();
        assert_eq!(store.count(), 0);
        assert!(store.is_empty());
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn add_then_get_returns_equal_entity() {
        let mut store = KeyedStore::new();
        let widget = Widget::new(1, "Laptop", 10);
        store.add(widget.clone()).unwrap();

        assert_eq!(store.get_by_id(id(1)).unwrap(), widget);
        assert!(store.contains(id(1)));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn duplicate_add_fails_and_keeps_original() {
        let mut store = KeyedStore::new();
        store.add(Widget::new(1, "Laptop", 10)).unwrap();

        let result = store.add(Widget::new(1, "Phone", 3));
        assert_eq!(result, Err(StoreError::DuplicateKey { id: id(1) }));

        let kept = store.get_by_id(id(1)).unwrap();
        assert_eq!(kept.name, "Laptop");
        assert_eq!(kept.quantity(), 10);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn get_missing_fails_with_not_found() {
        let store: KeyedStore<Widget> = KeyedStore::new();
        assert_eq!(
            store.get_by_id(id(9)),
            Err(StoreError::NotFound { id: id(9) })
        );
        assert!(store.get(id(9)).is_none());
    }

    #[test]
    fn remove_present_then_lookup_fails() {
        let mut store = KeyedStore::new();
        store.add(Widget::new(1, "Laptop", 10)).unwrap();
        store.add(Widget::new(2, "Phone", 5)).unwrap();

        let removed = store.remove(id(1)).unwrap();
        assert_eq!(removed.name, "Laptop");
        assert!(store.get_by_id(id(1)).unwrap_err().is_not_found());

        // Other entries are unaffected.
        assert_eq!(store.get_by_id(id(2)).unwrap().name, "Phone");
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn remove_missing_fails_with_not_found() {
        let mut store: KeyedStore<Widget> = KeyedStore::new();
        assert_eq!(store.remove(id(3)), Err(StoreError::NotFound { id: id(3) }));
    }

    #[test]
    fn update_quantity_mutates_only_quantity() {
        let mut store = KeyedStore::new();
        store.add(Widget::new(1, "Laptop", 10)).unwrap();

        store.update_quantity(id(1), 0).unwrap();

        let widget = store.get_by_id(id(1)).unwrap();
        assert_eq!(widget.quantity(), 0);
        assert_eq!(widget.name, "Laptop");
    }

    #[test]
    fn negative_quantity_checked_before_existence() {
        let mut store = KeyedStore::new();
        store.add(Widget::new(1, "Laptop", 10)).unwrap();

        assert_eq!(
            store.update_quantity(id(1), -1),
            Err(StoreError::InvalidQuantity { quantity: -1 })
        );
        assert_eq!(
            store.update_quantity(id(404), -1),
            Err(StoreError::InvalidQuantity { quantity: -1 })
        );
        assert_eq!(store.get_by_id(id(1)).unwrap().quantity(), 10);
    }

    #[test]
    fn oversized_quantity_rejected() {
        let mut store = KeyedStore::new();
        store.add(Widget::new(1, "Laptop", 10)).unwrap();

        let too_big = i64::from(u32::MAX) + 1;
        assert_eq!(
            store.update_quantity(id(1), too_big),
            Err(StoreError::InvalidQuantity { quantity: too_big })
        );
    }

    #[test]
    fn update_missing_with_valid_quantity_fails_with_not_found() {
        let mut store: KeyedStore<Widget> = KeyedStore::new();
        assert_eq!(
            store.update_quantity(id(5), 3),
            Err(StoreError::NotFound { id: id(5) })
        );
    }

    #[test]
    fn get_all_preserves_insertion_order() {
        let mut store = KeyedStore::new();
        for (value, name) in [(30, "c"), (10, "a"), (20, "b")] {
            store.add(Widget::new(value, name, 1)).unwrap();
        }
        store.remove(id(10)).unwrap();
        store.add(Widget::new(10, "a2", 1)).unwrap();

        let names: Vec<_> = store.get_all().into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["c", "b", "a2"]);
        assert_eq!(store.ids().collect::<Vec<_>>(), vec![id(30), id(20), id(10)]);
    }

    #[test]
    fn get_all_is_independent_copy() {
        let mut store = KeyedStore::new();
        store.add(Widget::new(1, "Laptop", 10)).unwrap();

        let mut snapshot = store.get_all();
        snapshot[0].set_quantity(99, QuantityToken::new());
        snapshot.clear();

        assert_eq!(store.count(), 1);
        assert_eq!(store.get_by_id(id(1)).unwrap().quantity(), 10);
    }

    #[test]
    fn find_returns_first_match_in_order() {
        let mut store = KeyedStore::new();
        store.add(Widget::new(2, "Phone", 5)).unwrap();
        store.add(Widget::new(1, "Phone case", 7)).unwrap();

        let found = store.find(|w| w.name.starts_with("Phone")).unwrap();
        assert_eq!(found.id, id(2));
        assert!(store.find(|w| w.name == "Tablet").is_none());
    }

    #[test]
    fn try_from_entities_rejects_duplicates() {
        let result = KeyedStore::try_from_entities(vec![
            Widget::new(1, "a", 1),
            Widget::new(2, "b", 1),
            Widget::new(1, "c", 1),
        ]);
        assert_eq!(
            result.unwrap_err(),
            StoreError::DuplicateKey { id: id(1) }
        );
    }

    #[test]
    fn increase_quantity_adds_to_current() {
        let mut store = KeyedStore::new();
        store.add(Widget::new(1, "Laptop", 10)).unwrap();

        assert_eq!(store.increase_quantity(id(1), 5), Ok(15));
        assert_eq!(store.increase_quantity(id(1), -15), Ok(0));
        assert_eq!(store.get_by_id(id(1)).unwrap().quantity(), 0);
    }

    #[test]
    fn increase_quantity_rejects_out_of_range_results() {
        let mut store = KeyedStore::new();
        store.add(Widget::new(1, "Laptop", 10)).unwrap();

        assert_eq!(
            store.increase_quantity(id(1), -11),
            Err(StoreError::invalid_quantity(-1))
        );
        assert_eq!(
            store.increase_quantity(id(1), i64::from(u32::MAX)),
            Err(StoreError::invalid_quantity(i64::from(u32::MAX) + 10))
        );
        assert_eq!(
            store.increase_quantity(id(1), i64::MAX),
            Err(StoreError::invalid_quantity(i64::MAX))
        );
        assert_eq!(store.get_by_id(id(1)).unwrap().quantity(), 10);
    }

    #[test]
    fn increase_quantity_on_missing_id_is_not_found() {
        let mut store: KeyedStore<Widget> = KeyedStore::new();
        assert_eq!(
            store.increase_quantity(id(3), 1),
            Err(StoreError::not_found(id(3)))
        );
    }

    #[test]
    fn total_quantity_sums_entries() {
        let store = KeyedStore::try_from_entities(vec![
            Widget::new(1, "a", 3),
            Widget::new(2, "b", u32::MAX),
        ])
        .unwrap();
        assert_eq!(store.total_quantity(), 3 + u64::from(u32::MAX));
    }

    #[test]
    fn clear_empties_store() {
        let mut store = KeyedStore::try_from_entities(vec![Widget::new(1, "a", 1)]).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.ids().count(), 0);
    }

    proptest! {
        #[test]
        fn count_matches_contains(ops in prop::collection::vec((any::<bool>(), 0i32..20), 0..64)) {
            let mut store = KeyedStore::new();
            for (insert, value) in ops {
                if insert {
                    let _ = store.add(Widget::new(value, "w", 1));
                } else {
                    let _ = store.remove(id(value));
                }
            }

            let present = (0..20).filter(|v| store.contains(id(*v))).count();
            prop_assert_eq!(store.count(), present);
            prop_assert_eq!(store.get_all().len(), present);
        }
    }
}
