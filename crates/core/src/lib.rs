//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the validated item name, and the quantity type.

pub mod error;
pub mod name;

pub use error::{DomainError, DomainResult};
pub use name::ItemName;

/// Count of units held for an item.
///
/// Unsigned: the store never holds a negative quantity.
pub type Quantity = u64;
