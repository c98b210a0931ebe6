//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Persistence
/// failures belong to the infra crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty item name, non-integer quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The named item is not tracked by the inventory.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    /// Returns `true` if this error is a rejected input rather than a missing item.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
