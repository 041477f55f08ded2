//! Error types for product stores.

use thiserror::Error;

/// Failure reported by a [`ProductStore`](super::ProductStore).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The store actor is no longer accepting requests.
    #[error("Store closed")]
    Closed,

    /// The store actor dropped the response channel.
    #[error("Store dropped response channel")]
    Dropped,

    /// Any other failure inside the store.
    #[error("Store backend error: {0}")]
    Backend(String),
}
