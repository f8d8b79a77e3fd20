//! Catalog error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the catalog domain.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, recoverable lookup failures. Degraded
/// inputs (out-of-range rating scores, empty review lists) are normalized to
/// defaults instead of surfacing here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalog entry exists for this product id.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CatalogError {
    pub fn not_found(id: ProductId) -> Self {
        Self::ProductNotFound(id)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
