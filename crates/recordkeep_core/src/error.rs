//! Error types for store operations.

use crate::entity::RecordId;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
///
/// These cover expected conditions (a duplicate id, a missing id, a negative
/// quantity) and are returned to the immediate caller. Stores never retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An entity with this id is already stored.
    #[error("record with id {id} already exists")]
    DuplicateKey {
        /// The colliding id.
        id: RecordId,
    },

    /// No entity with this id is stored.
    #[error("record with id {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: RecordId,
    },

    /// A quantity update was outside the representable non-negative range.
    #[error("quantity cannot be negative or exceed {max}: attempted to set quantity to {quantity}", max = u32::MAX)]
    InvalidQuantity {
        /// The rejected quantity.
        quantity: i64,
    },

    /// A predicate lookup matched nothing.
    #[error("no record matched the given predicate")]
    NoMatch,
}

impl StoreError {
    /// Creates a duplicate key error.
    pub fn duplicate_key(id: RecordId) -> Self {
        Self::DuplicateKey { id }
    }

    /// Creates a not found error.
    pub fn not_found(id: RecordId) -> Self {
        Self::NotFound { id }
    }

    /// Creates an invalid quantity error.
    pub fn invalid_quantity(quantity: i64) -> Self {
        Self::InvalidQuantity { quantity }
    }

    /// Returns `true` if this error reports a missing record.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NoMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_id() {
        let err = StoreError::duplicate_key(RecordId::new(7));
        assert_eq!(err.to_string(), "record with id 7 already exists");

        let err = StoreError::not_found(RecordId::new(42));
        assert_eq!(err.to_string(), "record with id 42 not found");
    }

    #[test]
    fn invalid_quantity_message_carries_value() {
        let err = StoreError::invalid_quantity(-5);
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn not_found_classification() {
        assert!(StoreError::not_found(RecordId::new(1)).is_not_found());
        assert!(StoreError::NoMatch.is_not_found());
        assert!(!StoreError::invalid_quantity(-1).is_not_found());
    }
}
