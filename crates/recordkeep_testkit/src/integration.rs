//! Model-checking harness for keyed stores.
//!
//! Applies operations to a [`KeyedStore`] and to a plain map side by side,
//! and asserts that both agree after every step.

use crate::generators::StoreOperation;
use recordkeep_core::{Entity, KeyedStore, RecordId, Stocked, StoreError};
use recordkeep_domain::InventoryItem;
use std::collections::HashMap;

/// A test harness tracking a store against a reference model.
pub struct StoreHarness {
    /// The store under test.
    pub store: KeyedStore<InventoryItem>,
    model: HashMap<RecordId, InventoryItem>,
}

impl StoreHarness {
    /// Creates a harness with an empty store.
    pub fn new() -> Self {
        Self {
            store: KeyedStore::new(),
            model: HashMap::new(),
        }
    }

    /// Applies `op` to both the store and the model, checking the store's
    /// result against the model's expectation.
    pub fn apply(&mut self, op: &StoreOperation) {
        match op {
            StoreOperation::Add { item } => {
                let id = item.id();
                let result = self.store.add(item.clone());
                if self.model.contains_key(&id) {
                    assert_eq!(result, Err(StoreError::duplicate_key(id)));
                } else {
                    assert_eq!(result, Ok(()));
                    self.model.insert(id, item.clone());
                }
            }
            StoreOperation::Remove { id } => {
                let result = self.store.remove(*id);
                match self.model.remove(id) {
                    Some(expected) => assert_eq!(result, Ok(expected)),
                    None => assert_eq!(result, Err(StoreError::not_found(*id))),
                }
            }
            StoreOperation::Get { id } => {
                let result = self.store.get_by_id(*id);
                match self.model.get(id) {
                    Some(expected) => assert_eq!(result.as_ref(), Ok(expected)),
                    None => assert_eq!(result, Err(StoreError::not_found(*id))),
                }
            }
            StoreOperation::UpdateQuantity { id, quantity } => {
                let result = self.store.update_quantity(*id, *quantity);
                match (u32::try_from(*quantity), self.model.get_mut(id)) {
                    (Err(_), _) => {
                        assert_eq!(result, Err(StoreError::invalid_quantity(*quantity)));
                    }
                    (Ok(_), None) => {
                        assert_eq!(result, Err(StoreError::not_found(*id)));
                    }
                    (Ok(valid), Some(expected)) => {
                        assert_eq!(result, Ok(()));
                        *expected = InventoryItem::new(
                            expected.id(),
                            expected.name(),
                            valid,
                            expected.date_added(),
                        );
                    }
                }
            }
            StoreOperation::IncreaseQuantity { id, delta } => {
                let result = self.store.increase_quantity(*id, *delta);
                let Some(expected) = self.model.get_mut(id) else {
                    assert_eq!(result, Err(StoreError::not_found(*id)));
                    self.verify_all();
                    return;
                };
                match i64::from(expected.quantity()).checked_add(*delta) {
                    None => assert_eq!(result, Err(StoreError::invalid_quantity(*delta))),
                    Some(target) => match u32::try_from(target) {
                        Err(_) => {
                            assert_eq!(result, Err(StoreError::invalid_quantity(target)));
                        }
                        Ok(valid) => {
                            assert_eq!(result, Ok(valid));
                            *expected = InventoryItem::new(
                                expected.id(),
                                expected.name(),
                                valid,
                                expected.date_added(),
                            );
                        }
                    },
                }
            }
        }
        self.verify_all();
    }

    /// Applies every operation in order.
    pub fn apply_all(&mut self, ops: &[StoreOperation]) {
        for op in ops {
            self.apply(op);
        }
    }

    /// Verifies the store holds exactly the model's entries.
    pub fn verify_all(&self) {
        assert_eq!(self.store.count(), self.model.len());
        for (id, expected) in &self.model {
            assert_eq!(self.store.get(*id), Some(expected), "mismatch for {id:?}");
        }
    }

    /// Returns the number of tracked entries.
    pub fn tracked_count(&self) -> usize {
        self.model.len()
    }
}

impl Default for StoreHarness {
    fn default() -> Self {
        Self::new()
    }
}
