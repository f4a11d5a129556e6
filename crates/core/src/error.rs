//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Each field is validated before that field is written, so a rejected value
/// never lands. A call that changes several fields may still have applied the
/// ones checked before the failing one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A numeric field would become negative.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An entity with this identifier is already present.
    #[error("product id {0} already exists")]
    DuplicateKey(ProductId),

    /// No entity with this identifier is present.
    #[error("product id {0} not found")]
    NotFound(ProductId),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_key(id: impl Into<ProductId>) -> Self {
        Self::DuplicateKey(id.into())
    }

    pub fn not_found(id: impl Into<ProductId>) -> Self {
        Self::NotFound(id.into())
    }
}
