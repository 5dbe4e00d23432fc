//! Grading records.

use recordkeep_core::{Entity, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A student and their exam score.
///
/// Scores are stored as read. Values outside 0-100 are kept; importers flag
/// them instead of rejecting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: RecordId,
    full_name: String,
    score: i32,
}

impl Student {
    /// Creates a student record.
    pub fn new(id: impl Into<RecordId>, full_name: impl Into<String>, score: i32) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            score,
        }
    }

    /// Full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Exam score.
    pub fn score(&self) -> i32 {
        self.score
    }
}

impl Entity for Student {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {}): Score = {}", self.full_name, self.id, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_scores_are_kept() {
        let student = Student::new(7, "Esi", 104);
        assert_eq!(student.score(), 104);
        assert_eq!(student.to_string(), "Esi (ID: 7): Score = 104");
    }
}
