//! Record identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored record.
///
/// Record ids are plain integers that are:
/// - Assigned by the caller before insertion
/// - Unique within one store
/// - Immutable once assigned
///
/// Serialized as a bare integer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i32);

impl RecordId {
    /// Creates a record id from its integer value.
    #[inline]
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the integer value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<RecordId> for i32 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_roundtrip() {
        let id = RecordId::new(101);
        assert_eq!(id.get(), 101);
        assert_eq!(i32::from(id), 101);
        assert_eq!(RecordId::from(101), id);
    }

    #[test]
    fn display_and_debug() {
        let id = RecordId::new(-3);
        assert_eq!(id.to_string(), "-3");
        assert_eq!(format!("{:?}", id), "RecordId(-3)");
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" 12 ".parse::<RecordId>().unwrap(), RecordId::new(12));
        assert!("twelve".parse::<RecordId>().is_err());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&RecordId::new(5)).unwrap();
        assert_eq!(json, "5");
        let back: RecordId = serde_json::from_str("5").unwrap();
        assert_eq!(back, RecordId::new(5));
    }
}
