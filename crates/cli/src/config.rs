//! Environment configuration for the demo binary.

use std::path::PathBuf;

use stockroom_core::Quantity;
use stockroom_infra::DEFAULT_INVENTORY_PATH;
use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, parse_quantity};

pub const INVENTORY_PATH_ENV: &str = "STOCKROOM_INVENTORY_PATH";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub inventory_path: PathBuf,
    pub low_stock_threshold: Quantity,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; unset or blank keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(INVENTORY_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            config.inventory_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_ENV).filter(|t| !t.trim().is_empty()) {
            match parse_quantity(&raw) {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(err) => tracing::warn!(
                    "{LOW_STOCK_THRESHOLD_ENV} ignored ({err}); using {DEFAULT_LOW_STOCK_THRESHOLD}"
                ),
            }
        }

        config
    }
}
