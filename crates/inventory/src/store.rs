use indexmap::IndexMap;

use stockroom_core::{DomainError, DomainResult, ItemName, Quantity};

use crate::activity::ActivityLog;
use crate::report::StockReport;

/// Cutoff used by the low-stock report when the caller has no preference.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// In-memory stock levels keyed by item name.
///
/// Iteration follows insertion order. An absent item has quantity 0; removal
/// that empties an item deletes its entry, so "out of stock" and "untracked"
/// are the same state.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    items: IndexMap<ItemName, Quantity>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `item`, creating the entry if needed.
    ///
    /// Returns the new stored quantity. When `log` is given, a timestamped
    /// entry is appended to it.
    pub fn add(
        &mut self,
        item: &str,
        quantity: Quantity,
        log: Option<&mut ActivityLog>,
    ) -> DomainResult<Quantity> {
        let name = validated_name(item, "add")?;

        let current = self.get_quantity(name.as_str());
        let updated = current.checked_add(quantity).ok_or_else(|| {
            let err = DomainError::validation(format!(
                "adding {quantity} to '{name}' exceeds the maximum quantity"
            ));
            tracing::warn!(item = %name, %err, "rejected add");
            err
        })?;

        if let Some(log) = log {
            log.record_add(&name, quantity);
        }
        tracing::debug!(item = %name, quantity, stock = updated, "stock added");

        // Re-inserting an existing key keeps its position.
        self.items.insert(name, updated);
        Ok(updated)
    }

    /// Take `quantity` units of `item` out of stock.
    ///
    /// Returns `Some(remaining)` while stock is left, or `None` when the
    /// subtraction reached zero (or below) and the entry was deleted.
    pub fn remove(&mut self, item: &str, quantity: Quantity) -> DomainResult<Option<Quantity>> {
        let name = validated_name(item, "remove")?;

        let Some(stored) = self.items.get_mut(name.as_str()) else {
            let err = DomainError::not_found(name.as_str());
            tracing::warn!(item = %name, "{err}");
            return Err(err);
        };

        if quantity < *stored {
            *stored -= quantity;
            tracing::debug!(item = %name, quantity, stock = *stored, "stock removed");
            return Ok(Some(*stored));
        }

        self.items.shift_remove(name.as_str());
        tracing::debug!(item = %name, quantity, "stock depleted, item dropped");
        Ok(None)
    }

    /// Stored quantity of `item`, or 0 when it is not tracked.
    pub fn get_quantity(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Names of every item whose quantity is strictly below `threshold`,
    /// in insertion order.
    pub fn low_stock_report(&self, threshold: Quantity) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Printable view of every item and its quantity.
    pub fn report(&self) -> StockReport<'_> {
        StockReport::new(&self.items)
    }

    /// Write the full report to stdout.
    pub fn print_report(&self) {
        print!("{}", self.report());
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all stored quantities (saturating).
    pub fn total_units(&self) -> Quantity {
        self.items
            .values()
            .fold(0, |acc: Quantity, qty| acc.saturating_add(*qty))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> + '_ {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    /// Borrow the underlying ordered mapping (used when serializing).
    pub fn snapshot(&self) -> &IndexMap<ItemName, Quantity> {
        &self.items
    }

    /// Replace every entry at once, keeping the order of `items`.
    pub fn replace_all(&mut self, items: IndexMap<ItemName, Quantity>) {
        self.items = items;
    }
}

fn validated_name(item: &str, operation: &'static str) -> DomainResult<ItemName> {
    ItemName::new(item).inspect_err(|err| {
        tracing::warn!(operation, item, %err, "rejected invalid input");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn ordered(store: &InventoryStore) -> Vec<(String, Quantity)> {
        store.iter().map(|(n, q)| (n.to_string(), q)).collect()
    }

    #[test]
    fn add_creates_then_accumulates() {
        let mut store = InventoryStore::new();

        assert_eq!(store.add("apple", 10, None).unwrap(), 10);
        assert_eq!(store.add("apple", 4, None).unwrap(), 14);
        assert_eq!(store.get_quantity("apple"), 14);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_zero_tracks_item_at_zero() {
        let mut store = InventoryStore::new();
        store.add("pear", 0, None).unwrap();

        assert!(store.contains("pear"));
        assert_eq!(store.get_quantity("pear"), 0);
    }

    #[test]
    fn add_appends_to_log_when_given() {
        let mut store = InventoryStore::new();
        let mut log = ActivityLog::with_clock(test_time);

        store.add("apple", 10, Some(&mut log)).unwrap();
        store.add("banana", 2, None).unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].message, "Added 10 of apple");
        assert_eq!(log.entries()[0].at, test_time());
    }

    #[test]
    fn add_rejects_empty_name_without_mutation() {
        let mut store = InventoryStore::new();
        store.add("apple", 1, None).unwrap();
        let mut log = ActivityLog::with_clock(test_time);

        let err = store.add("  ", 3, Some(&mut log)).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
        assert_eq!(ordered(&store), vec![("apple".to_string(), 1)]);
        assert!(log.is_empty());
    }

    #[test]
    fn add_rejects_overflow_without_mutation() {
        let mut store = InventoryStore::new();
        store.add("bolts", Quantity::MAX - 1, None).unwrap();

        let err = store.add("bolts", 2, None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.get_quantity("bolts"), Quantity::MAX - 1);
    }

    #[test]
    fn remove_partial_keeps_item() {
        let mut store = InventoryStore::new();
        store.add("apple", 10, None).unwrap();

        assert_eq!(store.remove("apple", 3).unwrap(), Some(7));
        assert_eq!(store.get_quantity("apple"), 7);
        assert!(store.contains("apple"));
    }

    #[test]
    fn remove_exact_or_more_deletes_item() {
        let mut store = InventoryStore::new();
        store.add("apple", 3, None).unwrap();
        store.add("kiwi", 3, None).unwrap();

        assert_eq!(store.remove("apple", 3).unwrap(), None);
        assert_eq!(store.remove("kiwi", 50).unwrap(), None);
        assert!(store.is_empty());
        assert_eq!(store.get_quantity("apple"), 0);
    }

    #[test]
    fn remove_keeps_order_of_remaining_items() {
        let mut store = InventoryStore::new();
        for name in ["a", "b", "c", "d"] {
            store.add(name, 1, None).unwrap();
        }

        store.remove("b", 1).unwrap();

        let names: Vec<_> = store.iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn remove_missing_item_is_not_found_and_unchanged() {
        let mut store = InventoryStore::new();
        store.add("apple", 5, None).unwrap();
        let before = ordered(&store);

        let err = store.remove("orange", 1).unwrap_err();
        assert_eq!(err, DomainError::NotFound("orange".to_string()));
        assert_eq!(ordered(&store), before);
    }

    #[test]
    fn remove_rejects_empty_name() {
        let mut store = InventoryStore::new();
        let err = store.remove("", 1).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn low_stock_report_uses_strict_threshold_in_insertion_order() {
        let mut store = InventoryStore::new();
        store.add("zucchini", 1, None).unwrap();
        store.add("apple", 5, None).unwrap();
        store.add("banana", 4, None).unwrap();

        assert_eq!(store.low_stock_report(DEFAULT_LOW_STOCK_THRESHOLD), vec!["zucchini", "banana"]);
        assert!(store.low_stock_report(0).is_empty());
        assert!(InventoryStore::new().low_stock_report(100).is_empty());
    }

    #[test]
    fn demo_scenario() {
        let mut store = InventoryStore::new();

        store.add("apple", 10, None).unwrap();
        store.add("banana", 2, None).unwrap();
        store.remove("apple", 3).unwrap();
        assert!(store.remove("orange", 1).is_err());

        assert_eq!(store.get_quantity("apple"), 7);
        let low = store.low_stock_report(DEFAULT_LOW_STOCK_THRESHOLD);
        assert!(low.contains(&"banana".to_string()));
        assert!(!low.contains(&"apple".to_string()));
        assert!(!store.contains("orange"));
    }

    #[test]
    fn replace_all_swaps_contents() {
        let mut store = InventoryStore::new();
        store.add("old", 1, None).unwrap();

        let mut fresh = IndexMap::new();
        fresh.insert(ItemName::new("new").unwrap(), 9);
        store.replace_all(fresh);

        assert!(!store.contains("old"));
        assert_eq!(store.get_quantity("new"), 9);
        assert_eq!(store.total_units(), 9);
    }

    #[test]
    fn print_report_does_not_panic() {
        let mut store = InventoryStore::new();
        store.add("apple", 1, None).unwrap();
        store.print_report();
        InventoryStore::new().print_report();
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: two adds to the same item sum up.
        #[test]
        fn adds_accumulate(
            item in "[a-z]{1,12}",
            q1 in 0u64..1_000_000,
            q2 in 0u64..1_000_000,
        ) {
            let mut store = InventoryStore::new();
            store.add(&item, q1, None).unwrap();
            store.add(&item, q2, None).unwrap();
            prop_assert_eq!(store.get_quantity(&item), q1 + q2);
        }

        /// Property: removal either deletes (q >= stored) or subtracts.
        #[test]
        fn remove_subtracts_or_deletes(
            stored in 1u64..10_000,
            q in 0u64..20_000,
        ) {
            let mut store = InventoryStore::new();
            store.add("widget", stored, None).unwrap();

            let remaining = store.remove("widget", q).unwrap();

            if q >= stored {
                prop_assert_eq!(remaining, None);
                prop_assert!(!store.contains("widget"));
                prop_assert_eq!(store.get_quantity("widget"), 0);
            } else {
                prop_assert_eq!(remaining, Some(stored - q));
                prop_assert_eq!(store.get_quantity("widget"), stored - q);
            }
        }

        /// Property: the low-stock report is exactly the items below the threshold.
        #[test]
        fn low_stock_matches_filter(
            entries in prop::collection::vec(("[a-z]{1,8}", 0u64..20), 0..16),
            threshold in 0u64..20,
        ) {
            let mut store = InventoryStore::new();
            for (name, qty) in &entries {
                store.add(name, *qty, None).unwrap();
            }

            let report = store.low_stock_report(threshold);
            let expected: Vec<String> = store
                .iter()
                .filter(|(_, q)| *q < threshold)
                .map(|(n, _)| n.to_string())
                .collect();

            prop_assert_eq!(report, expected);
        }
    }
}
