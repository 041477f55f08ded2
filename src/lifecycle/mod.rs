//! Runtime orchestration and lifecycle management.
//!
//! - [`ProductSystem`]: builds the catalog, starts the store actor, wires the service
//! - [`setup_tracing`]: initializes the tracing/logging infrastructure

pub mod product_system;
pub mod tracing;

pub use product_system::*;
pub use self::tracing::*;
