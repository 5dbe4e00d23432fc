//! Inventory command implementation.

use super::{open_log, save_log};
use chrono::{Local, NaiveDateTime};
use recordkeep_core::{Entity, Stocked};
use recordkeep_domain::InventoryItem;
use serde::Serialize;
use std::path::Path;

/// One listed inventory entry.
#[derive(Debug, Serialize)]
pub struct ItemSummary {
    /// Item id.
    pub id: i32,
    /// Item name.
    pub name: String,
    /// Quantity on hand.
    pub quantity: u32,
    /// When the item was recorded.
    pub date_added: NaiveDateTime,
}

impl From<&InventoryItem> for ItemSummary {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id().get(),
            name: item.name().to_string(),
            quantity: item.quantity(),
            date_added: item.date_added(),
        }
    }
}

/// Appends one item to the log at `path`.
pub fn add(
    path: &Path,
    id: i32,
    name: &str,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let item = InventoryItem::new(id, name, quantity, Local::now().naive_local());
    let total = append(path, [item])?;
    println!("Added item {id}. {total} items saved to {}", path.display());
    Ok(())
}

/// Appends the sample items to the log at `path`.
pub fn seed(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let total = append(path, sample_items(Local::now().naive_local()))?;
    println!("Sample data added. {total} items saved to {}", path.display());
    Ok(())
}

/// Prints the items saved at `path`.
pub fn list(path: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let items = load_summaries(path)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        _ => print_text_output(path, &items),
    }

    Ok(())
}

fn append<I>(path: &Path, items: I) -> Result<usize, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = InventoryItem>,
{
    let mut log = open_log::<InventoryItem>(path)?;
    log.extend(items);
    save_log(&log)
}

fn load_summaries(path: &Path) -> Result<Vec<ItemSummary>, Box<dyn std::error::Error>> {
    let log = open_log::<InventoryItem>(path)?;
    Ok(log.iter().map(ItemSummary::from).collect())
}

fn sample_items(now: NaiveDateTime) -> Vec<InventoryItem> {
    [
        (1, "Laptop", 10),
        (2, "Mouse", 20),
        (3, "Keyboard", 15),
        (4, "Monitor", 8),
        (5, "Headphones", 25),
    ]
    .into_iter()
    .map(|(id, name, quantity)| InventoryItem::new(id, name, quantity, now))
    .collect()
}

fn print_text_output(path: &Path, items: &[ItemSummary]) {
    println!("Inventory: {}", path.display());
    println!("==========");
    if items.is_empty() {
        println!("No items found.");
        return;
    }
    for item in items {
        println!(
            "  [{}] {} x{} (added {})",
            item.id,
            item.name,
            item.quantity,
            item.date_added.format("%Y-%m-%d %H:%M:%S")
        );
    }
    println!();
    println!("Total: {} items", items.len());
}
