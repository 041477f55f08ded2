use crate::catalog::{ConstraintCatalog, FieldConstraints};
use std::sync::Arc;
use tracing::{debug, trace};

use super::{Violation, ViolationSet};

/// Evaluates a [`ConstraintCatalog`] against entity instances.
///
/// The validator is the single interpreter for every rule in the catalog.
/// It walks fields in declaration order and, within a field, rules in
/// declaration order, so identical input always yields identical output.
/// Every rule is evaluated; a field can collect several violations.
///
/// Cloning is cheap: the catalog is shared behind an `Arc`.
pub struct Validator<E> {
    catalog: Arc<ConstraintCatalog<E>>,
}

impl<E> Clone for Validator<E> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<E> Validator<E> {
    pub fn new(catalog: Arc<ConstraintCatalog<E>>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ConstraintCatalog<E> {
        &self.catalog
    }

    /// Validates every catalogued field of `entity`.
    pub fn validate(&self, entity: &E) -> ViolationSet {
        let mut violations = ViolationSet::new();
        for field in self.catalog.fields() {
            check_field(field, entity, &mut violations);
        }
        debug!(violations = violations.len(), "Validated");
        violations
    }

    /// Validates a single field. Unknown paths yield an empty set.
    pub fn validate_field(&self, entity: &E, path: &str) -> ViolationSet {
        let mut violations = ViolationSet::new();
        if let Some(field) = self.catalog.field(path) {
            check_field(field, entity, &mut violations);
        }
        violations
    }

    pub fn is_valid(&self, entity: &E) -> bool {
        self.catalog.fields().iter().all(|field| {
            let value = field.value(entity);
            field.constraints().iter().all(|c| c.rule.check(&value))
        })
    }
}

fn check_field<E>(field: &FieldConstraints<E>, entity: &E, violations: &mut ViolationSet) {
    let value = field.value(entity);
    for constraint in field.constraints() {
        if !constraint.rule.check(&value) {
            trace!(field = field.path(), rule = ?constraint.rule, "Rule failed");
            violations.push(Violation::new(field.path(), constraint.message.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FieldValue, Rule};

    struct Reading {
        label: Option<String>,
        level: Option<i32>,
    }

    fn label(r: &Reading) -> FieldValue<'_> {
        r.label.as_deref().into()
    }

    fn level(r: &Reading) -> FieldValue<'_> {
        r.level.into()
    }

    fn validator() -> Validator<Reading> {
        let catalog = ConstraintCatalog::builder()
            .field("label", label)
            .rule(Rule::Required)
            .rule(Rule::length(2, 4))
            .rule(Rule::OneOf(&["LOW", "HIGH"]))
            .field("level", level)
            .rule(Rule::at_least(0))
            .rule(Rule::at_most(10))
            .rule(Rule::at_least(0))
            .message("must be greater than or equal to 0")
            .build()
            .unwrap();
        Validator::new(Arc::new(catalog))
    }

    #[test]
    fn test_collects_multiple_violations_per_field() {
        let reading = Reading {
            label: Some("MEDIUM".into()),
            level: Some(1),
        };
        let violations = validator().validate(&reading);

        let messages: Vec<_> = violations.for_field("label").map(|v| v.message()).collect();
        assert_eq!(messages, vec!["size must be between 2 and 4", "must be one of [LOW, HIGH]"]);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_identical_failures_are_reported_once() {
        let reading = Reading {
            label: Some("LOW".into()),
            level: Some(-1),
        };
        let violations = validator().validate(&reading);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations.first().unwrap().field(), "level");
    }

    #[test]
    fn test_order_is_deterministic() {
        let reading = Reading {
            label: None,
            level: Some(11),
        };
        let v = validator();
        let first = v.validate(&reading);
        let second = v.validate(&reading);

        assert_eq!(first, second);
        assert_eq!(first.fields(), vec!["label", "level"]);
        assert_eq!(first.first().unwrap().message(), "must not be null");
    }

    #[test]
    fn test_rules_on_wrong_shape_are_reported() {
        let catalog = ConstraintCatalog::builder()
            .field("level", level)
            .rule(Rule::length(3, 5))
            .rule(Rule::OneOf(&["A"]))
            .build()
            .unwrap();
        let v = Validator::new(Arc::new(catalog));

        let violations = v.validate(&Reading {
            label: None,
            level: Some(1_000_000),
        });
        assert_eq!(violations.for_field("level").count(), 2);

        let unset = Reading {
            label: None,
            level: None,
        };
        assert!(v.is_valid(&unset));
    }

    #[test]
    fn test_validate_field_and_is_valid() {
        let v = validator();
        let good = Reading {
            label: Some("HIGH".into()),
            level: Some(3),
        };
        let bad = Reading {
            label: Some("HIGH".into()),
            level: Some(30),
        };

        assert!(v.is_valid(&good));
        assert!(!v.is_valid(&bad));
        assert!(v.validate_field(&bad, "label").is_empty());
        assert_eq!(v.validate_field(&bad, "level").len(), 1);
        assert!(v.validate_field(&bad, "unknown").is_empty());
    }
}
