//! # Mock Store
//!
//! Utilities for testing code that depends on a [`ProductStore`] without a
//! real backend.
//!
//! Queue the responses you expect with [`MockStore::expect_save`], hand a
//! clone of the mock to the code under test, then assert on
//! [`MockStore::calls`] and [`MockStore::verify`].
//!
//! ```ignore
//! let mock = MockStore::new();
//! mock.expect_save().return_input();
//!
//! let service = ProductService::new(validator, mock.clone());
//! service.save(product).await?;
//!
//! assert_eq!(mock.calls(), 1);
//! mock.verify(); // Ensures all expectations were met
//! ```
//!
//! A save with no queued expectation panics, which makes "the store must not
//! be called" assertions fail loudly.

use super::{ProductStore, StoreError};
use crate::model::Product;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// What a queued `save` expectation answers with.
#[derive(Debug, Clone)]
enum Expectation {
    Return(Product),
    Echo,
    Fail(StoreError),
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    received: Vec<Product>,
}

/// A [`ProductStore`] that answers from queued expectations and records calls.
///
/// Clones share state, so a clone can be moved into the code under test while
/// the original stays with the test for assertions.
#[derive(Clone, Default)]
pub struct MockStore {
    state: Arc<Mutex<MockState>>,
}

impl MockStore {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `save` call.
    pub fn expect_save(&self) -> SaveExpectationBuilder {
        SaveExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Number of `save` calls received so far.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().received.len()
    }

    /// Products passed to `save`, in call order.
    pub fn received(&self) -> Vec<Product> {
        self.state.lock().unwrap().received.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

#[async_trait]
impl ProductStore for MockStore {
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.received.push(product.clone());
        match state.expectations.pop_front() {
            Some(Expectation::Return(stored)) => Ok(stored),
            Some(Expectation::Echo) => Ok(product),
            Some(Expectation::Fail(error)) => Err(error),
            None => panic!("Unexpected save: {:?}", product),
        }
    }
}

/// Builder for `save` expectations.
pub struct SaveExpectationBuilder {
    state: Arc<Mutex<MockState>>,
}

impl SaveExpectationBuilder {
    /// Answers with `product`.
    pub fn return_ok(self, product: Product) {
        self.push(Expectation::Return(product));
    }

    /// Answers with the product that was passed in.
    pub fn return_input(self) {
        self.push(Expectation::Echo);
    }

    /// Answers with an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Expectation::Fail(error));
    }

    fn push(self, expectation: Expectation) {
        self.state.lock().unwrap().expectations.push_back(expectation);
    }
}
