//! Warehouse stock records.

use chrono::NaiveDate;
use recordkeep_core::{Entity, QuantityToken, RecordId, Stocked};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An electronic product held in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: RecordId,
    name: String,
    quantity: u32,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    /// Creates an electronic item.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        quantity: u32,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    /// Product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Manufacturer.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Warranty length in months.
    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for ElectronicItem {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Stocked for ElectronicItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32, _token: QuantityToken) {
        self.quantity = quantity;
    }
}

impl fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Electronic Item [ID: {}, Name: {}, Quantity: {}, Brand: {}, Warranty: {} months]",
            self.id, self.name, self.quantity, self.brand, self.warranty_months
        )
    }
}

/// A perishable grocery product held in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: RecordId,
    name: String,
    quantity: u32,
    expiry_date: NaiveDate,
}

impl GroceryItem {
    /// Creates a grocery item.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        quantity: u32,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    /// Product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last day the product may be sold.
    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// Returns `true` if the product expired before `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }
}

impl Entity for GroceryItem {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Stocked for GroceryItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32, _token: QuantityToken) {
        self.quantity = quantity;
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grocery Item [ID: {}, Name: {}, Quantity: {}, Expiry: {}]",
            self.id,
            self.name,
            self.quantity,
            self.expiry_date.format("%Y-%m-%d")
        )
    }
}
