//! # recordkeep Grading
//!
//! Reads student records from flat files and summarizes them as grade reports.
//!
//! The input format is one student per line:
//!
//! ```text
//! 101, Ama Mensah, 85
//! 102, Kofi Boateng, 92
//! ```
//!
//! Fields are trimmed and blank lines are skipped. The first malformed line
//! aborts the read with a [`GradingError`] naming the line; no partial results
//! are returned. Scores outside the configured range are accepted and
//! reported as [`ScoreWarning`]s.
//!
//! ## Example
//!
//! ```rust
//! use recordkeep_grading::{parse_students_str, ClassReport, GradingConfig, GradingError};
//!
//! let import = parse_students_str("1, Alice, 85\n2, Bob, 92").unwrap();
//! assert_eq!(import.students.len(), 2);
//!
//! let report = ClassReport::from_students(&import.students, &GradingConfig::default());
//! assert_eq!(report.statistics().unwrap().highest, 92);
//!
//! let err = parse_students_str("1, Alice\n").unwrap_err();
//! assert!(matches!(err, GradingError::MissingField { line: 1, .. }));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod grade;
mod process;
mod reader;
mod report;

pub use config::GradingConfig;
pub use error::{Field, GradingError, GradingResult, MissingReason};
pub use grade::Grade;
pub use process::process_grades;
pub use reader::{
    parse_students, parse_students_str, read_students_from_file, ScoreWarning, StudentImport,
    StudentReader,
};
pub use report::{ClassReport, ClassStatistics, GradeCount};
