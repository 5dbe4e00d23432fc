//! # recordkeep Testkit
//!
//! Test utilities for recordkeep.
//!
//! This crate provides:
//! - Temporary workspaces and sample records
//! - Property-based test generators using proptest
//! - A model-checking harness for keyed stores
//!
//! ## Usage
//!
//! ```rust
//! use recordkeep_testkit::prelude::*;
//!
//! let workspace = TempWorkspace::new();
//! let path = workspace.write_students("class.txt", &["1, Alice, 85", "2, Bob, 92"]);
//!
//! let import = recordkeep_grading::read_students_from_file(&path).unwrap();
//! assert_eq!(import.students.len(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod integration;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::integration::*;
}

pub use fixtures::*;
pub use generators::*;
pub use integration::*;
