//! # Product Guard
//!
//! > **Validate-then-delegate persistence for products.**
//!
//! This crate checks a [`Product`](model::Product) against a declarative table
//! of field constraints and only hands it to a store when every constraint
//! holds. Each violated constraint is reported as a `(field, message)` pair in
//! a [`ViolationSet`](validation::ViolationSet).
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Rules as Data
//! Constraints live in a [`ConstraintCatalog`](catalog::ConstraintCatalog): an
//! ordered list of `(field path, accessor, rules)` entries. One generic
//! interpreter, the [`Validator`](validation::Validator), evaluates any catalog.
//! There is no reflection and no per-field validation code.
//!
//! ### Built Once, Shared Everywhere
//! The catalog is built at startup, wrapped in an `Arc`, and passed into the
//! validator. Nothing mutates it afterwards, so concurrent validations need no
//! locking.
//!
//! ### The Store is Opaque
//! [`ProductService`](service::ProductService) depends only on the
//! [`ProductStore`](store::ProductStore) trait. Swap in a database, the bundled
//! actor-backed [`InMemoryStore`](store::InMemoryStore), or a
//! [`MockStore`](store::mock::MockStore) in tests.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! [`ServiceError`](service::ServiceError) has exactly two variants:
//! `Validation` carries every violation and guarantees nothing was persisted;
//! `Store` carries the store's own [`StoreError`](store::StoreError) unchanged.
//!
//! ### 2. Deterministic Reports
//! Fields are evaluated in catalog order and rules in declaration order, so the
//! same input always produces the same violations in the same order.
//!
//! ### 3. Observability
//! `tracing` spans wrap every save. See [`lifecycle::tracing`] for details.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: the [`Product`](model::Product) entity and [`ProductStatus`](model::ProductStatus).
//! - [`catalog`]: rules, the catalog builder, and [`product_catalog`](catalog::product_catalog).
//! - [`validation`]: the validator and violation types.
//! - [`service`]: the validate-then-delegate boundary.
//! - [`store`]: the store trait, in-memory actor store, and mock store.
//! - [`config`]: store settings and environment overrides.
//! - [`lifecycle`]: system wiring, shutdown, and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod catalog;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;
