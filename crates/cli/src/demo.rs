//! Fixed demonstration sequence.

use std::io::Write;

use anyhow::Context;

use stockroom_core::{DomainError, DomainResult, Quantity};
use stockroom_infra::{InventoryRepository, LoadOutcome};
use stockroom_inventory::{ActivityLog, InventoryStore};

/// What one demo run did.
#[derive(Debug)]
pub struct DemoSummary {
    pub load: LoadOutcome,
    pub apple_stock: Quantity,
    pub low_items: Vec<String>,
    /// Operations that were rejected and skipped (e.g. removing an unknown item).
    pub rejected: Vec<DomainError>,
    pub activity: ActivityLog,
    pub store: InventoryStore,
}

/// Load, mutate, report, save.
///
/// Rejected operations are recorded and the sequence continues. Malformed
/// stored data and IO failures abort the run.
pub fn run_demo<R>(
    repo: &R,
    low_stock_threshold: Quantity,
    out: &mut impl Write,
) -> anyhow::Result<DemoSummary>
where
    R: InventoryRepository + ?Sized,
{
    let mut store = InventoryStore::new();
    let mut activity = ActivityLog::new();
    let mut rejected = Vec::new();

    let load = repo.load(&mut store).context("failed to load inventory")?;
    match load {
        LoadOutcome::Loaded { .. } => writeln!(out, "Inventory data loaded successfully.")?,
        LoadOutcome::StartedFresh => {
            writeln!(out, "No existing inventory file found. Starting fresh.")?
        }
    }

    skip_rejected(store.add("apple", 10, Some(&mut activity)), &mut rejected);
    skip_rejected(store.add("banana", 2, Some(&mut activity)), &mut rejected);
    skip_rejected(store.remove("apple", 3), &mut rejected);
    skip_rejected(store.remove("orange", 1), &mut rejected);

    let apple_stock = store.get_quantity("apple");
    writeln!(out, "Apple stock: {apple_stock}")?;

    let low_items = store.low_stock_report(low_stock_threshold);
    writeln!(out, "Low items: {low_items:?}")?;

    write!(out, "{}", store.report())?;

    repo.save(&store).context("failed to save inventory")?;
    writeln!(out, "Inventory data saved successfully.")?;

    Ok(DemoSummary {
        load,
        apple_stock,
        low_items,
        rejected,
        activity,
        store,
    })
}

fn skip_rejected<T>(result: DomainResult<T>, rejected: &mut Vec<DomainError>) {
    if let Err(err) = result {
        tracing::info!(%err, "operation skipped");
        rejected.push(err);
    }
}
