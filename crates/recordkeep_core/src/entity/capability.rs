//! Capabilities a record needs to live in a store.

use crate::entity::RecordId;

/// A record with a stable identity.
///
/// Implementors must return the same id for the whole lifetime of the value.
/// [`KeyedStore`](crate::KeyedStore) keys entries by this id and rejects a
/// second entity with the same one.
pub trait Entity: Clone {
    /// Returns the record's identifier.
    fn id(&self) -> RecordId;
}

/// Proof that a quantity change was validated by a store.
///
/// Only this crate can construct one, so [`Stocked::set_quantity`] cannot be
/// called from outside a store. Code elsewhere changes quantities through
/// [`KeyedStore::update_quantity`](crate::KeyedStore::update_quantity) or
/// [`KeyedStore::increase_quantity`](crate::KeyedStore::increase_quantity).
///
/// ```compile_fail
/// use recordkeep_core::QuantityToken;
///
/// let _token = QuantityToken { _private: () };
/// ```
#[derive(Debug)]
pub struct QuantityToken {
    _private: (),
}

impl QuantityToken {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

/// A record with a stock quantity.
///
/// The quantity is the only field a store mutates after insertion. Records
/// keep it private and expose it read-only.
pub trait Stocked: Entity {
    /// Returns the current quantity.
    fn quantity(&self) -> u32;

    /// Replaces the quantity. Requires a [`QuantityToken`], which only stores
    /// hand out after validation.
    fn set_quantity(&mut self, quantity: u32, token: QuantityToken);
}
