//! CLI command implementations.

pub mod grade;
pub mod health;
pub mod inventory;
pub mod stock;

use recordkeep_core::Entity;
use recordkeep_log::{LoadReport, LogConfig, PersistentLog, SaveReport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Loads the log stored at `path`.
///
/// A missing file yields an empty log. An unreadable file is an error so the
/// command never overwrites data it failed to read.
fn open_log<T>(path: &Path) -> Result<PersistentLog<T>, Box<dyn std::error::Error>>
where
    T: Entity + Serialize + DeserializeOwned,
{
    let mut log = PersistentLog::new(LogConfig::new(path));
    match log.load() {
        LoadReport::Failed(err) => Err(format!("cannot read {}: {err}", path.display()).into()),
        LoadReport::Loaded { .. } | LoadReport::Missing => Ok(log),
    }
}

/// Saves `log` to its configured file and returns the number of entries.
fn save_log<T>(log: &PersistentLog<T>) -> Result<usize, Box<dyn std::error::Error>>
where
    T: Entity + Serialize + DeserializeOwned,
{
    match log.save() {
        SaveReport::Saved { entries, .. } => Ok(entries),
        SaveReport::Failed(err) => Err(err.into()),
    }
}
