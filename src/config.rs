//! Runtime configuration.
//!
//! Log verbosity is controlled separately through `RUST_LOG`
//! (see [`setup_tracing`](crate::lifecycle::setup_tracing)).

use serde::Deserialize;
use std::str::FromStr;
use tracing::warn;

/// Environment variable overriding [`StoreConfig::buffer_size`].
pub const BUFFER_SIZE_VAR: &str = "PRODUCT_STORE_BUFFER";

/// Environment variable overriding [`StoreConfig::first_id`].
pub const FIRST_ID_VAR: &str = "PRODUCT_STORE_FIRST_ID";

/// Settings for the in-memory store actor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Capacity of the request channel.
    pub buffer_size: usize,
    /// Id given to the first product saved without one.
    pub first_id: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            first_id: 1,
        }
    }
}

impl StoreConfig {
    /// Reads overrides from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`StoreConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            buffer_size: parse_or(&lookup, BUFFER_SIZE_VAR, defaults.buffer_size),
            first_id: parse_or(&lookup, FIRST_ID_VAR, defaults.first_id),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(key, value = %raw, "Ignoring invalid setting");
                default
            }
        },
        None => default,
    }
}
