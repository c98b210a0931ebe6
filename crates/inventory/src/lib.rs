//! Inventory domain module.
//!
//! This crate contains the in-memory stock store and its business rules. It
//! performs no file IO; persistence lives in `stockroom-infra`.

pub mod activity;
pub mod input;
pub mod report;
pub mod store;

pub use activity::{ActivityLog, LogEntry};
pub use input::{StockRequest, parse_quantity};
pub use report::StockReport;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore};
