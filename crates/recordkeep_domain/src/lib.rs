//! # recordkeep Domain
//!
//! Record types stored by recordkeep's applications.
//!
//! Every record carries a caller-assigned [`RecordId`] and implements
//! [`Entity`](recordkeep_core::Entity). Stock records additionally implement
//! [`Stocked`](recordkeep_core::Stocked); their quantity is read-only outside
//! a store. All records serialize with field names preserved and dates as
//! ISO-8601 strings.
//!
//! | Module | Records |
//! |--------|---------|
//! | [`finance`] | [`Transaction`] |
//! | [`health`] | [`Patient`], [`Prescription`] |
//! | [`clinic`] | [`ClinicRecords`], [`PrescriptionIndex`], [`PatientQuery`] |
//! | [`grading`] | [`Student`] |
//! | [`warehouse`] | [`ElectronicItem`], [`GroceryItem`] |
//! | [`inventory`] | [`InventoryItem`] |

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod clinic;
pub mod finance;
pub mod grading;
pub mod health;
pub mod inventory;
pub mod warehouse;

pub use clinic::{ClinicRecords, PatientQuery, PrescriptionIndex};
pub use finance::Transaction;
pub use grading::Student;
pub use health::{Patient, Prescription};
pub use inventory::InventoryItem;
pub use recordkeep_core::RecordId;
pub use warehouse::{ElectronicItem, GroceryItem};
