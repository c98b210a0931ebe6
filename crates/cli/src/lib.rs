//! Demonstration entry point for the stockroom inventory.
//!
//! Not a stable command line: the binary runs one fixed sequence of
//! operations against the configured inventory file.

pub mod config;
pub mod demo;

pub use config::DemoConfig;
pub use demo::{DemoSummary, run_demo};
