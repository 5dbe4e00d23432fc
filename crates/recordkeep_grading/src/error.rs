//! Error types for student import.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for grading operations.
pub type GradingResult<T> = Result<T, GradingError>;

/// A column of the student record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Column 1, an integer id.
    StudentId,
    /// Column 2, free text.
    FullName,
    /// Column 3, an integer score.
    Score,
}

impl Field {
    /// All fields in column order.
    pub const ALL: [Field; 3] = [Field::StudentId, Field::FullName, Field::Score];

    /// Human-readable column name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::StudentId => "Student ID",
            Field::FullName => "Full Name",
            Field::Score => "Score",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a line was reported as missing a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingReason {
    /// The line did not split into exactly three fields.
    FieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// A field was empty after trimming.
    Blank(Field),
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { found } => write!(
                f,
                "expected 3 fields (ID, FullName, Score), but found {}",
                found
            ),
            Self::Blank(field) => write!(f, "{} is empty or missing", field),
        }
    }
}

/// Errors that can occur while importing student records.
#[derive(Debug, Error)]
pub enum GradingError {
    /// A line has the wrong number of fields or a blank field.
    #[error("line {line}: {reason}. Line content: '{content}'")]
    MissingField {
        /// 1-based line number.
        line: usize,
        /// What was missing.
        reason: MissingReason,
        /// The raw line.
        content: String,
    },

    /// A numeric field is not a valid integer.
    #[error("line {line}: {field} '{value}' is not a valid integer. Line content: '{content}'")]
    InvalidFormat {
        /// 1-based line number.
        line: usize,
        /// The offending field.
        field: Field,
        /// The trimmed field text.
        value: String,
        /// The raw line.
        content: String,
    },

    /// A file could not be opened, read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The input stream failed partway through.
    #[error("line {line}: read failed: {source}")]
    Read {
        /// 1-based number of the line being read.
        line: usize,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The input held no student records.
    #[error("no valid student records found in the input")]
    NoRecords,
}

impl GradingError {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the 1-based line number the error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MissingField { line, .. }
            | Self::InvalidFormat { line, .. }
            | Self::Read { line, .. } => Some(*line),
            Self::Io { .. } | Self::NoRecords => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_count_message() {
        let err = GradingError::MissingField {
            line: 3,
            reason: MissingReason::FieldCount { found: 2 },
            content: "1, Alice".into(),
        };
        assert_eq!(
            err.to_string(),
            "line 3: expected 3 fields (ID, FullName, Score), but found 2. Line content: '1, Alice'"
        );
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn blank_field_message_names_field() {
        let err = GradingError::MissingField {
            line: 1,
            reason: MissingReason::Blank(Field::FullName),
            content: "1, , 80".into(),
        };
        assert!(err.to_string().contains("Full Name is empty or missing"));
    }

    #[test]
    fn invalid_format_message() {
        let err = GradingError::InvalidFormat {
            line: 1,
            field: Field::Score,
            value: "XX".into(),
            content: "1, Alice, XX".into(),
        };
        assert_eq!(
            err.to_string(),
            "line 1: Score 'XX' is not a valid integer. Line content: '1, Alice, XX'"
        );
    }
}
