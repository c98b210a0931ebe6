//! Infrastructure layer: inventory persistence.

pub mod json_file;
pub mod repository;

pub use json_file::{DEFAULT_INVENTORY_PATH, JsonFileStore};
pub use repository::{InMemoryRepository, InventoryRepository, LoadOutcome, PersistenceError};
