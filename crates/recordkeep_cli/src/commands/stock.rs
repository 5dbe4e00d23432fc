//! Stock command implementation.
//!
//! Each invocation loads the stock file, rebuilds a [`KeyedStore`] from it,
//! applies one operation through the store, and saves the result.

use super::{open_log, save_log};
use chrono::NaiveDate;
use clap::ValueEnum;
use recordkeep_core::{KeyedStore, RecordId, Stocked, StoreResult};
use recordkeep_domain::{ElectronicItem, GroceryItem};
use recordkeep_log::{LogConfig, PersistentLog};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The kind of stock a command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StockKind {
    /// Electronic items.
    Electronics,
    /// Grocery items.
    Groceries,
}

impl StockKind {
    /// File used when no path is given.
    pub fn default_path(self) -> PathBuf {
        match self {
            Self::Electronics => PathBuf::from("electronics_stock.json"),
            Self::Groceries => PathBuf::from("groceries_stock.json"),
        }
    }
}

/// Prints every item of `kind` stored at `path`.
pub fn list(kind: StockKind, path: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    match kind {
        StockKind::Electronics => print_items::<ElectronicItem>(path, format),
        StockKind::Groceries => print_items::<GroceryItem>(path, format),
    }
}

/// Sets the quantity of item `id`.
pub fn set_quantity(
    kind: StockKind,
    path: &Path,
    id: i32,
    quantity: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = RecordId::new(id);
    match kind {
        StockKind::Electronics => {
            update::<ElectronicItem, _>(path, |store| store.update_quantity(id, quantity))?;
        }
        StockKind::Groceries => {
            update::<GroceryItem, _>(path, |store| store.update_quantity(id, quantity))?;
        }
    }
    println!("Quantity of item {id} set to {quantity}");
    Ok(())
}

/// Adds `by` to the quantity of item `id`.
pub fn increase(
    kind: StockKind,
    path: &Path,
    id: i32,
    by: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = RecordId::new(id);
    let quantity = match kind {
        StockKind::Electronics => {
            update::<ElectronicItem, _>(path, |store| store.increase_quantity(id, by))?
        }
        StockKind::Groceries => {
            update::<GroceryItem, _>(path, |store| store.increase_quantity(id, by))?
        }
    };
    println!("Increased stock for item {id}. New quantity: {quantity}");
    Ok(())
}

/// Removes item `id`.
pub fn remove(kind: StockKind, path: &Path, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let id = RecordId::new(id);
    let removed = match kind {
        StockKind::Electronics => {
            update::<ElectronicItem, _>(path, |store| store.remove(id))?.to_string()
        }
        StockKind::Groceries => {
            update::<GroceryItem, _>(path, |store| store.remove(id))?.to_string()
        }
    };
    println!("Removed: {removed}");
    Ok(())
}

/// Adds an electronic item.
pub fn add_electronic(
    path: &Path,
    id: i32,
    name: &str,
    quantity: u32,
    brand: &str,
    warranty_months: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let item = ElectronicItem::new(id, name, quantity, brand, warranty_months);
    let line = item.to_string();
    update::<ElectronicItem, _>(path, |store| store.add(item))?;
    println!("Added: {line}");
    Ok(())
}

/// Adds a grocery item.
pub fn add_grocery(
    path: &Path,
    id: i32,
    name: &str,
    quantity: u32,
    expiry: NaiveDate,
) -> Result<(), Box<dyn std::error::Error>> {
    let item = GroceryItem::new(id, name, quantity, expiry);
    let line = item.to_string();
    update::<GroceryItem, _>(path, |store| store.add(item))?;
    println!("Added: {line}");
    Ok(())
}

/// Loads the store at `path`, applies `op`, and saves the store back.
///
/// Nothing is written if loading or `op` fails.
fn update<T, R>(
    path: &Path,
    op: impl FnOnce(&mut KeyedStore<T>) -> StoreResult<R>,
) -> Result<R, Box<dyn std::error::Error>>
where
    T: Stocked + Serialize + DeserializeOwned,
{
    let mut store = load_store::<T>(path)?;
    let output = op(&mut store)?;

    let mut log = PersistentLog::new(LogConfig::new(path));
    log.extend(store.get_all());
    let saved = save_log(&log)?;
    debug!(path = %path.display(), items = saved, "stock saved");
    Ok(output)
}

fn load_store<T>(path: &Path) -> Result<KeyedStore<T>, Box<dyn std::error::Error>>
where
    T: Stocked + Serialize + DeserializeOwned,
{
    let log = open_log::<T>(path)?;
    Ok(KeyedStore::try_from_entities(log.get_all())?)
}

fn print_items<T>(path: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>>
where
    T: Stocked + Serialize + DeserializeOwned + Display,
{
    let store = load_store::<T>(path)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&store.get_all())?);
        }
        _ => {
            println!("Stock: {}", path.display());
            println!("======");
            if store.is_empty() {
                println!("No items found.");
            }
            for item in &store {
                println!("  {item}");
            }
            println!();
            println!(
                "Total: {} items, {} units",
                store.count(),
                store.total_quantity()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordkeep_core::StoreError;
    use tempfile::tempdir;

    fn expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, 31).unwrap()
    }

    #[test]
    fn add_then_update_then_remove() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("electronics.json");

        add_electronic(&path, 1, "iPhone 15", 50, "Apple", 12).unwrap();
        add_electronic(&path, 2, "Dell XPS 13", 15, "Dell", 36).unwrap();
        set_quantity(StockKind::Electronics, &path, 1, 45).unwrap();

        let store = load_store::<ElectronicItem>(&path).unwrap();
        assert_eq!(store.get_by_id(RecordId::new(1)).unwrap().quantity(), 45);

        remove(StockKind::Electronics, &path, 2).unwrap();
        let store = load_store::<ElectronicItem>(&path).unwrap();
        assert_eq!(store.count(), 1);
        assert!(!store.contains(RecordId::new(2)));
    }

    #[test]
    fn duplicate_add_is_rejected_and_file_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("groceries.json");

        add_grocery(&path, 101, "Organic Bananas", 100, expiry()).unwrap();
        let before = std::fs::read(&path).unwrap();

        let err = add_grocery(&path, 101, "Fake Bananas", 1, expiry()).unwrap_err();
        let err = err.downcast::<StoreError>().unwrap();
        assert_eq!(*err, StoreError::duplicate_key(RecordId::new(101)));
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("groceries.json");
        add_grocery(&path, 101, "Fresh Milk", 75, expiry()).unwrap();

        let err = set_quantity(StockKind::Groceries, &path, 101, -5).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::InvalidQuantity { quantity: -5 })
        ));

        let store = load_store::<GroceryItem>(&path).unwrap();
        assert_eq!(store.get_by_id(RecordId::new(101)).unwrap().quantity(), 75);
    }

    #[test]
    fn increase_adds_to_saved_quantity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("groceries.json");
        add_grocery(&path, 101, "Organic Bananas", 100, expiry()).unwrap();

        increase(StockKind::Groceries, &path, 101, 20).unwrap();
        increase(StockKind::Groceries, &path, 101, -70).unwrap();

        let store = load_store::<GroceryItem>(&path).unwrap();
        assert_eq!(store.get_by_id(RecordId::new(101)).unwrap().quantity(), 50);
    }

    #[test]
    fn increase_below_zero_leaves_file_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("electronics.json");
        add_electronic(&path, 1, "iPhone 15", 5, "Apple", 12).unwrap();
        let before = std::fs::read(&path).unwrap();

        let err = increase(StockKind::Electronics, &path, 1, -6).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::InvalidQuantity { quantity: -1 })
        ));
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[test]
    fn missing_item_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("electronics.json");

        let err = remove(StockKind::Electronics, &path, 999).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::NotFound { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn file_with_duplicate_ids_is_refused() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("electronics.json");

        let mut log = PersistentLog::new(LogConfig::new(&path));
        log.append(ElectronicItem::new(1, "A", 1, "X", 6));
        log.append(ElectronicItem::new(1, "B", 1, "Y", 6));
        assert!(log.save().is_ok());

        assert!(load_store::<ElectronicItem>(&path).is_err());
    }
}
