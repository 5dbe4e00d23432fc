//! Property-based test generators using proptest.
//!
//! Provides strategies for generating records, store operations, and
//! flat-file student lines.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use recordkeep_core::RecordId;
use recordkeep_domain::{InventoryItem, Student};

/// Strategy for generating record ids from a small range, so collisions are
/// common.
pub fn record_id_strategy() -> impl Strategy<Value = RecordId> {
    (0i32..64).prop_map(RecordId::new)
}

/// Strategy for generating requested quantities, including negative and
/// out-of-range values.
pub fn quantity_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        6 => 0i64..1_000,
        2 => -1_000i64..0,
        1 => Just(i64::from(u32::MAX)),
        1 => (i64::from(u32::MAX) + 1)..i64::MAX,
    ]
}

/// Strategy for generating whole-second timestamps.
pub fn timestamp_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (2000i32..2035, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(year, month, day, hour, min, sec)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .and_then(|d| d.and_hms_opt(hour, min, sec))
                .expect("generated date is always valid")
        },
    )
}

/// Strategy for generating item names.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,18}[A-Za-z0-9]").expect("Invalid regex")
}

/// Strategy for generating inventory items.
pub fn inventory_item_strategy() -> impl Strategy<Value = InventoryItem> {
    (
        record_id_strategy(),
        name_strategy(),
        any::<u32>(),
        timestamp_strategy(),
    )
        .prop_map(|(id, name, quantity, date_added)| {
            InventoryItem::new(id, name, quantity, date_added)
        })
}

/// Strategy for generating a log's worth of inventory items. Ids may repeat.
pub fn inventory_items_strategy(max_len: usize) -> impl Strategy<Value = Vec<InventoryItem>> {
    prop::collection::vec(inventory_item_strategy(), 0..max_len)
}

/// Strategy for generating a student and a flat-file line describing it.
///
/// The line pads fields with random whitespace.
pub fn student_line_strategy() -> impl Strategy<Value = (Student, String)> {
    (
        any::<i32>(),
        name_strategy(),
        -50i32..150,
        prop::collection::vec(prop::sample::select(vec!["", " ", "  ", "\t"]), 6),
    )
        .prop_map(|(id, name, score, pad)| {
            let line = format!(
                "{}{id}{},{}{name}{},{}{score}{}",
                pad[0], pad[1], pad[2], pad[3], pad[4], pad[5]
            );
            (Student::new(id, name, score), line)
        })
}

/// A single operation against a keyed store.
#[derive(Debug, Clone)]
pub enum StoreOperation {
    /// Add an item
    Add {
        /// Item to add
        item: InventoryItem,
    },
    /// Remove an item
    Remove {
        /// Item id
        id: RecordId,
    },
    /// Look up an item
    Get {
        /// Item id
        id: RecordId,
    },
    /// Set an item's quantity
    UpdateQuantity {
        /// Item id
        id: RecordId,
        /// Requested quantity
        quantity: i64,
    },
    /// Add to an item's quantity
    IncreaseQuantity {
        /// Item id
        id: RecordId,
        /// Amount to add, possibly negative
        delta: i64,
    },
}

/// Strategy for generating store operations.
pub fn store_operation_strategy() -> impl Strategy<Value = StoreOperation> {
    prop_oneof![
        3 => inventory_item_strategy().prop_map(|item| StoreOperation::Add { item }),
        1 => record_id_strategy().prop_map(|id| StoreOperation::Remove { id }),
        2 => record_id_strategy().prop_map(|id| StoreOperation::Get { id }),
        2 => (record_id_strategy(), quantity_strategy())
            .prop_map(|(id, quantity)| StoreOperation::UpdateQuantity { id, quantity }),
        2 => (record_id_strategy(), quantity_strategy())
            .prop_map(|(id, delta)| StoreOperation::IncreaseQuantity { id, delta }),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<StoreOperation>> {
    prop::collection::vec(store_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
