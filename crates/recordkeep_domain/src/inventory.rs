//! Inventory log records.

use chrono::NaiveDateTime;
use recordkeep_core::{Entity, QuantityToken, RecordId, Stocked};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An item recorded in the inventory log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: RecordId,
    name: String,
    quantity: u32,
    date_added: NaiveDateTime,
}

impl InventoryItem {
    /// Creates an inventory item.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        quantity: u32,
        date_added: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            date_added,
        }
    }

    /// Item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the item was recorded.
    pub fn date_added(&self) -> NaiveDateTime {
        self.date_added
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Stocked for InventoryItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32, _token: QuantityToken) {
        self.quantity = quantity;
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Quantity: {}, Date Added: {}",
            self.id,
            self.name,
            self.quantity,
            self.date_added.format("%Y-%m-%d %H:%M")
        )
    }
}
