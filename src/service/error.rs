//! Error types for the product service.

use crate::store::StoreError;
use crate::validation::ViolationSet;
use thiserror::Error;

/// Why [`ProductService::save`](super::ProductService::save) refused or failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The product broke one or more constraints. Nothing was persisted.
    #[error("Product validation failed: {0}")]
    Validation(ViolationSet),

    /// The store failed. Surfaced as-is, never retried.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// The violations, if this is a validation failure.
    pub fn violations(&self) -> Option<&ViolationSet> {
        match self {
            ServiceError::Validation(violations) => Some(violations),
            ServiceError::Store(_) => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }
}
