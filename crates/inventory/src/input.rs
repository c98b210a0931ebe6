//! Untyped input boundary.
//!
//! Quantities and names that arrive as text (command lines, environment,
//! other callers holding strings) are checked here before they reach the
//! store, so a malformed request is rejected without touching stock.

use stockroom_core::{DomainError, DomainResult, ItemName, Quantity};

use crate::activity::ActivityLog;
use crate::store::InventoryStore;

/// Parse a non-negative integer quantity from text.
pub fn parse_quantity(raw: &str) -> DomainResult<Quantity> {
    raw.trim().parse::<Quantity>().map_err(|_| {
        DomainError::validation(format!(
            "quantity must be a non-negative integer, got {raw:?}"
        ))
    })
}

/// A validated (item, quantity) pair built from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRequest {
    pub item: ItemName,
    pub quantity: Quantity,
}

impl StockRequest {
    pub fn parse(item: &str, raw_quantity: &str) -> DomainResult<Self> {
        let item = ItemName::new(item)?;
        let quantity = parse_quantity(raw_quantity)?;
        Ok(Self { item, quantity })
    }

    pub fn apply_add(
        &self,
        store: &mut InventoryStore,
        log: Option<&mut ActivityLog>,
    ) -> DomainResult<Quantity> {
        store.add(self.item.as_str(), self.quantity, log)
    }

    pub fn apply_remove(&self, store: &mut InventoryStore) -> DomainResult<Option<Quantity>> {
        store.remove(self.item.as_str(), self.quantity)
    }
}
