//! Pure data structures validated by the [`Validator`](crate::validation::Validator).

pub mod product;

pub use product::*;
