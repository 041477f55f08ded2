//! The persistence seam consumed by [`ProductService`](crate::service::ProductService).
//!
//! The service only needs one operation: hand over a validated [`Product`]
//! and get back the stored copy. Anything behind [`ProductStore`] (SQL, files,
//! a remote call, an in-memory actor) is opaque to it.
//!
//! - [`InMemoryStore`]: a reference store backed by an actor task.
//! - [`mock::MockStore`]: expectation-driven test double with call counting.

pub mod error;
pub mod memory;
pub mod mock;

pub use error::*;
pub use memory::*;

use crate::model::Product;
use async_trait::async_trait;
use std::sync::Arc;

/// A store that persists validated products.
///
/// Implementations decide how ids are assigned, whether saves are idempotent,
/// and how long a save may block. Failures are reported as [`StoreError`] and
/// are never retried by callers in this crate.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persists `product` and returns the stored copy.
    async fn save(&self, product: Product) -> Result<Product, StoreError>;
}

#[async_trait]
impl<S: ProductStore + ?Sized> ProductStore for Arc<S> {
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        (**self).save(product).await
    }
}
