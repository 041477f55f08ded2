//! # Constraint Catalog
//!
//! A declarative table of `(field, rules)` entries for one entity type.
//!
//! Rules are data ([`Rule`]), not code: they can be enumerated, inspected and
//! changed without touching the interpreter in [`crate::validation`]. Each
//! entry pairs a field path with an accessor projecting the entity field into
//! a [`FieldValue`], so the same interpreter serves any entity.
//!
//! The catalog is immutable once built. Build it once at startup and share it
//! behind an `Arc`.
//!
//! ```
//! use product_guard::catalog::{ConstraintCatalog, FieldValue, Rule};
//!
//! struct Tag { name: Option<String> }
//!
//! fn name(tag: &Tag) -> FieldValue<'_> {
//!     tag.name.as_deref().into()
//! }
//!
//! let catalog = ConstraintCatalog::builder()
//!     .field("name", name)
//!     .rule(Rule::Required)
//!     .rule(Rule::length(1, 20))
//!     .build()
//!     .unwrap();
//! assert_eq!(catalog.len(), 1);
//! ```

pub mod error;
pub mod product;
pub mod rule;

pub use error::*;
pub use product::product_catalog;
pub use rule::*;

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

/// Projects one field of `E` into a [`FieldValue`].
pub type Accessor<E> = fn(&E) -> FieldValue<'_>;

/// The rules declared for one field, in evaluation order.
pub struct FieldConstraints<E> {
    path: &'static str,
    accessor: Accessor<E>,
    constraints: Vec<Constraint>,
}

impl<E> FieldConstraints<E> {
    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Reads the field from `entity`.
    pub fn value<'a>(&self, entity: &'a E) -> FieldValue<'a> {
        (self.accessor)(entity)
    }
}

impl<E> fmt::Debug for FieldConstraints<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConstraints")
            .field("path", &self.path)
            .field("constraints", &self.constraints)
            .finish()
    }
}

/// Immutable table of field constraints for entity type `E`.
///
/// Fields are kept in declaration order, which is the order the
/// [`Validator`](crate::validation::Validator) evaluates them in.
pub struct ConstraintCatalog<E> {
    fields: Vec<FieldConstraints<E>>,
}

impl<E> ConstraintCatalog<E> {
    pub fn builder() -> CatalogBuilder<E> {
        CatalogBuilder::new()
    }

    /// All field entries, in declaration order.
    pub fn fields(&self) -> &[FieldConstraints<E>] {
        &self.fields
    }

    /// The constraints declared for `path`, if the field is catalogued.
    pub fn rules_for(&self, path: &str) -> Option<&[Constraint]> {
        self.field(path).map(FieldConstraints::constraints)
    }

    pub fn field(&self, path: &str) -> Option<&FieldConstraints<E>> {
        self.fields.iter().find(|field| field.path == path)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<E> fmt::Debug for ConstraintCatalog<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.fields).finish()
    }
}

/// Fluent builder for [`ConstraintCatalog`].
///
/// `rule` and `message` apply to the most recently declared field.
/// Structural problems are collected and reported by [`CatalogBuilder::build`].
pub struct CatalogBuilder<E> {
    fields: Vec<FieldConstraints<E>>,
    orphan_rule: bool,
}

impl<E> CatalogBuilder<E> {
    fn new() -> Self {
        Self {
            fields: Vec::new(),
            orphan_rule: false,
        }
    }

    /// Declares a new field.
    pub fn field(mut self, path: &'static str, accessor: Accessor<E>) -> Self {
        self.fields.push(FieldConstraints {
            path,
            accessor,
            constraints: Vec::new(),
        });
        self
    }

    /// Adds a rule to the current field.
    pub fn rule(mut self, constraint: impl Into<Constraint>) -> Self {
        match self.fields.last_mut() {
            Some(field) => field.constraints.push(constraint.into()),
            None => self.orphan_rule = true,
        }
        self
    }

    /// Overrides the message of the current field's last rule.
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        match self
            .fields
            .last_mut()
            .and_then(|field| field.constraints.last_mut())
        {
            Some(constraint) => constraint.message = message.into(),
            None => self.orphan_rule = true,
        }
        self
    }

    pub fn build(self) -> Result<ConstraintCatalog<E>, CatalogError> {
        if self.orphan_rule {
            return Err(CatalogError::RuleWithoutField);
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.path) {
                return Err(CatalogError::DuplicateField(field.path.to_string()));
            }
            if field.constraints.is_empty() {
                return Err(CatalogError::NoRules(field.path.to_string()));
            }
            for constraint in &field.constraints {
                check_rule(field.path, &constraint.rule)?;
            }
        }

        Ok(ConstraintCatalog {
            fields: self.fields,
        })
    }
}

fn check_rule(path: &str, rule: &Rule) -> Result<(), CatalogError> {
    match rule {
        Rule::Length {
            min, max: Some(max), ..
        } if min > max => Err(CatalogError::InvalidBounds {
            field: path.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }),
        Rule::Range {
            min: Some(min),
            max: Some(max),
        } if min > max => Err(CatalogError::InvalidBounds {
            field: path.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }),
        Rule::OneOf(set) if set.is_empty() => Err(CatalogError::EmptySet(path.to_string())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: Option<String>,
        count: Option<i32>,
    }

    fn name(item: &Item) -> FieldValue<'_> {
        item.name.as_deref().into()
    }

    fn count(item: &Item) -> FieldValue<'_> {
        item.count.into()
    }

    #[test]
    fn test_build_keeps_declaration_order() {
        let catalog = ConstraintCatalog::builder()
            .field("name", name)
            .rule(Rule::Required)
            .rule(Rule::length(1, 5))
            .field("count", count)
            .rule(Rule::at_least(0))
            .build()
            .unwrap();

        let paths: Vec<_> = catalog.fields().iter().map(|f| f.path()).collect();
        assert_eq!(paths, vec!["name", "count"]);
        assert_eq!(catalog.rules_for("name").unwrap().len(), 2);
        assert!(catalog.rules_for("missing").is_none());

        let item = Item {
            name: Some("abc".into()),
            count: None,
        };
        assert_eq!(catalog.fields()[0].value(&item), FieldValue::Text("abc"));
        assert_eq!(catalog.fields()[1].value(&item), FieldValue::Absent);
    }

    #[test]
    fn test_message_overrides_last_rule() {
        let catalog = ConstraintCatalog::builder()
            .field("name", name)
            .rule(Rule::Required)
            .message("name is mandatory")
            .build()
            .unwrap();

        assert_eq!(catalog.rules_for("name").unwrap()[0].message, "name is mandatory");
    }

    #[test]
    fn test_build_rejects_malformed_tables() {
        let duplicate = ConstraintCatalog::builder()
            .field("name", name)
            .rule(Rule::Required)
            .field("name", name)
            .rule(Rule::Required)
            .build();
        assert_eq!(duplicate.unwrap_err(), CatalogError::DuplicateField("name".into()));

        let empty = ConstraintCatalog::<Item>::builder().field("name", name).build();
        assert_eq!(empty.unwrap_err(), CatalogError::NoRules("name".into()));

        let orphan = ConstraintCatalog::<Item>::builder().rule(Rule::Required).build();
        assert_eq!(orphan.unwrap_err(), CatalogError::RuleWithoutField);

        let inverted = ConstraintCatalog::builder()
            .field("count", count)
            .rule(Rule::range(10, 1))
            .build();
        assert!(matches!(inverted.unwrap_err(), CatalogError::InvalidBounds { .. }));

        let no_members = ConstraintCatalog::builder()
            .field("name", name)
            .rule(Rule::OneOf(&[]))
            .build();
        assert_eq!(no_members.unwrap_err(), CatalogError::EmptySet("name".into()));
    }
}
