//! Caller-owned activity log.
//!
//! Entries are kept in memory only; nothing here is persisted or read back.

use chrono::{DateTime, Utc};

use stockroom_core::{ItemName, Quantity};

/// One timestamped record of a stock operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.at, self.message)
    }
}

/// Append-only list of [`LogEntry`] values.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
    clock: fn() -> DateTime<Utc>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Use a fixed time source. Prefer this in tests for determinism.
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    pub(crate) fn record_add(&mut self, item: &ItemName, quantity: Quantity) {
        let entry = LogEntry {
            at: (self.clock)(),
            message: format!("Added {quantity} of {item}"),
        };
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}
