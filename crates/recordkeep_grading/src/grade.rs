//! Letter grade bands.

use serde::Serialize;
use std::fmt;

/// A letter grade derived from a score.
///
/// Bands: A 80-100, B 70-79, C 60-69, D 50-59, F below 50. Scores above 100
/// have no band and map to [`Grade::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Grade {
    /// 80-100.
    A,
    /// 70-79.
    B,
    /// 60-69.
    C,
    /// 50-59.
    D,
    /// Below 50.
    F,
    /// Above 100.
    Invalid,
}

impl Grade {
    /// The banded grades, best first. Excludes [`Grade::Invalid`].
    pub const BANDS: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Maps a score to its grade.
    #[must_use]
    pub const fn from_score(score: i32) -> Self {
        match score {
            80..=100 => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            i32::MIN..=49 => Grade::F,
            _ => Grade::Invalid,
        }
    }

    /// The grade's letter, or `Invalid`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
            Grade::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
