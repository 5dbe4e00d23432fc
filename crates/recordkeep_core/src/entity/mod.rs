//! Entity identity and capabilities.

mod capability;
mod id;

pub use capability::{Entity, QuantityToken, Stocked};
pub use id::RecordId;
