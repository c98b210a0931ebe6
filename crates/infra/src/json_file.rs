//! Flat JSON file persistence.
//!
//! The file holds one object mapping item names to non-negative integer
//! quantities, pretty-printed with 4-space indentation:
//!
//! ```text
//! {
//!     "apple": 7,
//!     "banana": 2
//! }
//! ```
//!
//! Saves go through a sibling `.{file_name}.tmp` file that is synced and then
//! renamed over the destination, so an interrupted save leaves the previous
//! file intact.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use stockroom_core::{ItemName, Quantity};
use stockroom_inventory::InventoryStore;

use crate::repository::{InventoryRepository, LoadOutcome, PersistenceError};

/// File used when the caller does not pick one.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

const INDENT: &[u8] = b"    ";

/// Inventory persisted as a single JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> Result<PathBuf, PersistenceError> {
        let file_name = self.path.file_name().ok_or_else(|| {
            PersistenceError::io(
                &self.path,
                io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })?;

        let mut tmp_name = std::ffi::OsString::from(".");
        tmp_name.push(file_name);
        tmp_name.push(".tmp");
        Ok(self.path.with_file_name(tmp_name))
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_PATH)
    }
}

impl InventoryRepository for JsonFileStore {
    fn load(&self, store: &mut InventoryStore) -> Result<LoadOutcome, PersistenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.path.display(),
                    "no existing inventory file found, starting fresh"
                );
                return Ok(LoadOutcome::StartedFresh);
            }
            Err(err) => return Err(PersistenceError::io(&self.path, err)),
        };

        // Validate everything before the store is touched.
        let items =
            decode(&text).map_err(|e| PersistenceError::malformed(&self.path, e.to_string()))?;

        let count = items.len();
        store.replace_all(items);
        tracing::info!(path = %self.path.display(), items = count, "inventory data loaded");
        Ok(LoadOutcome::Loaded { items: count })
    }

    fn save(&self, store: &InventoryStore) -> Result<(), PersistenceError> {
        let bytes = encode(store.snapshot())
            .map_err(|e| PersistenceError::io(&self.path, io::Error::other(e)))?;

        let tmp_path = self.temp_path()?;
        if let Err(err) = write_synced(&tmp_path, &bytes) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PersistenceError::io(&tmp_path, err));
        }

        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PersistenceError::io(&self.path, err));
        }

        tracing::info!(path = %self.path.display(), items = store.len(), "inventory data saved");
        Ok(())
    }
}

fn decode(text: &str) -> Result<IndexMap<ItemName, Quantity>, serde_json::Error> {
    serde_json::from_str(text)
}

fn encode(items: &IndexMap<ItemName, Quantity>) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    items.serialize(&mut ser)?;
    Ok(buf)
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
