//! Full stock report rendering.

use indexmap::IndexMap;

use stockroom_core::{ItemName, Quantity};

/// Borrowed view of the store that renders as:
///
/// ```text
///
/// Items Report:
/// apple -> 7
/// banana -> 2
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StockReport<'a> {
    items: &'a IndexMap<ItemName, Quantity>,
}

impl<'a> StockReport<'a> {
    pub(crate) fn new(items: &'a IndexMap<ItemName, Quantity>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl core::fmt::Display for StockReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f)?;
        writeln!(f, "Items Report:")?;
        for (item, qty) in self.items {
            writeln!(f, "{item} -> {qty}")?;
        }
        Ok(())
    }
}
