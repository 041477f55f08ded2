//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate.
//!
//! ## Configuration
//!
//! Verbosity comes from the `RUST_LOG` environment variable. The output uses
//! the compact format without module targets, so spans show inline
//! (e.g. `save:`) and lines stay short.
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info cargo run
//!
//! # Full payloads at function entry
//! RUST_LOG=debug cargo run
//!
//! # Every failed rule
//! RUST_LOG=trace cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Service**: one `save` span per call, carrying the product id and title;
//!   `Rejected` with the violation list, `Saved`, or `Store failed`
//! - **Validator**: violation counts at `debug`, each failed rule at `trace`
//! - **Store actor**: startup, every save and lookup, shutdown with final size
//!
//! **With `RUST_LOG=info`**, the demo binary prints (violations list cut
//! short here):
//!
//! ```text
//! 2026-10-16T09:14:02.117942Z  INFO Constraint catalog built fields=10
//! 2026-10-16T09:14:02.118127Z  INFO Store started next_id=Some(1)
//! 2026-10-16T09:14:02.118410Z  INFO Saved id=Some(1) size=1
//! 2026-10-16T09:14:02.118455Z  INFO valid_product:save: Saved stored_id=Some(1) id=None title=Some("Desk lamp")
//! 2026-10-16T09:14:02.118473Z  INFO Product stored id=Some(1)
//! 2026-10-16T09:14:02.118530Z  WARN invalid_product:save: Rejected count=6 violations=title: size must be between 3 and 100; description: size must be at least 50; ... id=None title=Some("ab")
//! 2026-10-16T09:14:02.118561Z  WARN Violation field="title" messages=["size must be between 3 and 100"]
//! 2026-10-16T09:14:02.118590Z  INFO Shutting down system...
//! 2026-10-16T09:14:02.118642Z  INFO Shutdown size=1
//! 2026-10-16T09:14:02.118671Z  INFO System shutdown complete.
//! ```
//!
//! Event fields come first and the fields of the enclosing spans follow.
//!
//! Use the `?` sigil in `debug!(?product, ..)` to record a value through its
//! `Debug` representation as a structured field.

/// Initializes the tracing subscriber for the application.
///
/// Call once at startup; a second call panics because the global subscriber
/// is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths
        .compact() // Compact format shows spans inline (e.g., "save:")
        .init();
}
