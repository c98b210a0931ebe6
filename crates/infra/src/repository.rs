//! Persistence abstraction for the inventory store.

use std::cell::RefCell;
use std::path::PathBuf;

use indexmap::IndexMap;
use thiserror::Error;

use stockroom_core::{ItemName, Quantity};
use stockroom_inventory::InventoryStore;

/// Result of a successful load.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Stored data replaced the in-memory store.
    Loaded { items: usize },
    /// Nothing was stored yet; the in-memory store was left as it was.
    StartedFresh,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access inventory file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed inventory data in {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Storage backend for a whole inventory snapshot.
///
/// `load` replaces the store wholesale (or leaves it untouched when nothing is
/// stored); `save` overwrites whatever was stored before. Last writer wins.
pub trait InventoryRepository {
    fn load(&self, store: &mut InventoryStore) -> Result<LoadOutcome, PersistenceError>;
    fn save(&self, store: &InventoryStore) -> Result<(), PersistenceError>;
}

/// In-memory repository for tests/dev.
///
/// Single-threaded like the store it backs.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    inner: RefCell<Option<IndexMap<ItemName, Quantity>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the last saved snapshot, if any.
    pub fn stored(&self) -> Option<IndexMap<ItemName, Quantity>> {
        self.inner.borrow().clone()
    }
}

impl InventoryRepository for InMemoryRepository {
    fn load(&self, store: &mut InventoryStore) -> Result<LoadOutcome, PersistenceError> {
        let stored = self.stored();
        match stored {
            Some(items) => {
                let count = items.len();
                store.replace_all(items);
                Ok(LoadOutcome::Loaded { items: count })
            }
            None => Ok(LoadOutcome::StartedFresh),
        }
    }

    fn save(&self, store: &InventoryStore) -> Result<(), PersistenceError> {
        *self.inner.borrow_mut() = Some(store.snapshot().clone());
        Ok(())
    }
}
