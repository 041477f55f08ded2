//! Error types for catalog construction.

use thiserror::Error;

/// Problems detected while building a [`ConstraintCatalog`](super::ConstraintCatalog).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The same field path was declared twice.
    #[error("Field declared twice: {0}")]
    DuplicateField(String),

    /// A field was declared without any rule.
    #[error("Field has no rules: {0}")]
    NoRules(String),

    /// A rule or message was added before any field was declared.
    #[error("Rule declared before any field")]
    RuleWithoutField,

    /// A length or range rule has its lower bound above its upper bound.
    #[error("Invalid bounds on {field}: min {min} is greater than max {max}")]
    InvalidBounds {
        field: String,
        min: String,
        max: String,
    },

    /// A membership rule has no members.
    #[error("Empty membership set on {0}")]
    EmptySet(String),
}
