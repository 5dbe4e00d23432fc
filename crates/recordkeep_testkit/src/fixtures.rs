//! Test fixtures and workspace helpers.
//!
//! Provides temporary directories for file-backed tests and fixed sample
//! records for common test scenarios.

use chrono::{NaiveDate, NaiveDateTime};
use recordkeep_core::{Entity, KeyedStore, Stocked};
use recordkeep_domain::{ElectronicItem, GroceryItem, InventoryItem, Student};
use recordkeep_log::{LogConfig, PersistentLog};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory with automatic cleanup.
pub struct TempWorkspace {
    dir: TempDir,
}

impl TempWorkspace {
    /// Creates a new empty workspace.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Returns the workspace root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the path of `name` inside the workspace. Nothing is created.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `lines` to `name`, one per line, and returns the file's path.
    pub fn write_students(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.path(name);
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&path, contents).expect("Failed to write student file");
        path
    }

    /// Writes raw bytes to `name` and returns the file's path.
    pub fn write_raw(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Creates a log that saves to `name` without syncing.
    pub fn log<T>(&self, name: &str) -> PersistentLog<T>
    where
        T: Entity + Serialize + DeserializeOwned,
    {
        PersistentLog::new(LogConfig::new(self.path(name)).sync_on_save(false))
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `f` with a fresh temporary workspace.
pub fn with_workspace<F, R>(f: F) -> R
where
    F: FnOnce(&TempWorkspace) -> R,
{
    let workspace = TempWorkspace::new();
    f(&workspace)
}

/// A fixed timestamp so saved files are reproducible.
pub fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .expect("valid timestamp")
}

/// Sample records.
pub mod samples {
    use super::*;

    /// Five inventory items with ids 1-5.
    pub fn inventory() -> Vec<InventoryItem> {
        let now = fixed_timestamp();
        vec![
            InventoryItem::new(1, "Laptop", 10, now),
            InventoryItem::new(2, "Mouse", 20, now),
            InventoryItem::new(3, "Keyboard", 15, now),
            InventoryItem::new(4, "Monitor", 8, now),
            InventoryItem::new(5, "Headphones", 25, now),
        ]
    }

    /// Three electronic items with ids 1-3.
    pub fn electronics() -> Vec<ElectronicItem> {
        vec![
            ElectronicItem::new(1, "iPhone 15", 50, "Apple", 12),
            ElectronicItem::new(2, "Samsung Galaxy S24", 30, "Samsung", 24),
            ElectronicItem::new(3, "Dell XPS 13", 15, "Dell", 36),
        ]
    }

    /// Three grocery items with ids 101-103.
    pub fn groceries() -> Vec<GroceryItem> {
        let today = fixed_timestamp().date();
        let expiry = |days| today + chrono::Duration::days(days);
        vec![
            GroceryItem::new(101, "Organic Bananas", 100, expiry(7)),
            GroceryItem::new(102, "Fresh Milk", 75, expiry(5)),
            GroceryItem::new(103, "Whole Grain Bread", 50, expiry(3)),
        ]
    }

    /// A small class covering every grade band.
    pub fn students() -> Vec<Student> {
        vec![
            Student::new(101, "Ama Mensah", 85),
            Student::new(102, "Kofi Boateng", 72),
            Student::new(103, "Esi Owusu", 64),
            Student::new(104, "Yaw Asante", 55),
            Student::new(105, "Akua Darko", 38),
        ]
    }

    /// [`students`] in the flat-file format.
    pub fn student_lines() -> Vec<String> {
        students()
            .iter()
            .map(|s| format!("{}, {}, {}", s.id(), s.full_name(), s.score()))
            .collect()
    }
}

/// Builds a keyed store holding `entities`.
///
/// # Panics
///
/// Panics if two entities share an id.
pub fn store_of<T: Stocked>(entities: Vec<T>) -> KeyedStore<T> {
    KeyedStore::try_from_entities(entities).expect("fixture ids must be unique")
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordkeep_core::RecordId;

    #[test]
    fn workspace_paths_live_under_root() {
        let workspace = TempWorkspace::new();
        assert!(workspace.path("a.json").starts_with(workspace.root()));
        assert!(!workspace.path("a.json").exists());
    }

    #[test]
    fn write_students_round_trips_through_reader() {
        with_workspace(|ws| {
            let lines = samples::student_lines();
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let path = ws.write_students("class.txt", &refs);

            let import = recordkeep_grading::read_students_from_file(&path).unwrap();
            assert_eq!(import.students, samples::students());
        });
    }

    #[test]
    fn sample_stores_have_unique_ids() {
        assert_eq!(store_of(samples::inventory()).count(), 5);
        assert_eq!(store_of(samples::electronics()).count(), 3);

        let groceries = store_of(samples::groceries());
        assert!(groceries.contains(RecordId::new(102)));
    }

    #[test]
    fn workspace_log_saves_inside_workspace() {
        with_workspace(|ws| {
            let mut log = ws.log::<InventoryItem>("inventory.json");
            log.extend(samples::inventory());
            assert!(log.save().is_ok());
            assert!(ws.path("inventory.json").exists());
        });
    }
}
