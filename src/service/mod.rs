//! # Product Service
//!
//! The boundary in front of the store: validate, then delegate, or refuse.
//!
//! [`ProductService::save`] runs the [`Validator`] first. A non-empty
//! [`ViolationSet`](crate::validation::ViolationSet) fails the call with
//! [`ServiceError::Validation`] and the store is never contacted. A valid
//! product is handed to the [`ProductStore`] untouched, and the store's answer
//! comes back unchanged.

pub mod error;

pub use error::*;

use crate::model::Product;
use crate::store::ProductStore;
use crate::validation::Validator;
use tracing::{debug, info, instrument, warn};

/// Validates products and forwards the valid ones to a store.
///
/// The service keeps no mutable state; share it behind an `Arc` to serve
/// concurrent callers.
pub struct ProductService<S> {
    validator: Validator<Product>,
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    pub fn new(validator: Validator<Product>, store: S) -> Self {
        Self { validator, store }
    }

    pub fn validator(&self) -> &Validator<Product> {
        &self.validator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saves `product` if it satisfies every catalogued constraint.
    ///
    /// # Errors
    /// - [`ServiceError::Validation`] with every violation found; the store is not called.
    /// - [`ServiceError::Store`] with the store's own error.
    #[instrument(skip(self, product), fields(id = ?product.id, title = ?product.title))]
    pub async fn save(&self, product: Product) -> Result<Product, ServiceError> {
        debug!(?product, "save called");

        let violations = self.validator.validate(&product);
        if !violations.is_empty() {
            warn!(count = violations.len(), %violations, "Rejected");
            return Err(ServiceError::Validation(violations));
        }

        match self.store.save(product).await {
            Ok(stored) => {
                info!(stored_id = ?stored.id, "Saved");
                Ok(stored)
            }
            Err(e) => {
                warn!(error = %e, "Store failed");
                Err(e.into())
            }
        }
    }
}
