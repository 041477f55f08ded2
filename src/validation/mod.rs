//! Catalog-driven validation.
//!
//! - [`Validator`] interprets a [`ConstraintCatalog`](crate::catalog::ConstraintCatalog).
//! - [`Violation`] and [`ViolationSet`] report what failed.

pub mod validator;
pub mod violation;

pub use validator::*;
pub use violation::*;
