//! Rule definitions and the values they are evaluated against.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::borrow::Cow;

/// A field's value, as seen by the rules.
///
/// Accessors in the catalog project an entity field into this shape so a
/// single interpreter can evaluate every rule without knowing the entity type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// The field holds no value.
    Absent,
    Text(&'a str),
    Integer(i64),
    Decimal(Decimal),
    Float(f64),
    /// A member of a closed enumeration, by symbol.
    Symbol(&'static str),
    Timestamp(DateTime<Utc>),
}

impl FieldValue<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Text)
    }
}

impl From<Option<i32>> for FieldValue<'_> {
    fn from(value: Option<i32>) -> Self {
        value.map_or(FieldValue::Absent, |v| FieldValue::Integer(v.into()))
    }
}

impl From<Option<i64>> for FieldValue<'_> {
    fn from(value: Option<i64>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Integer)
    }
}

impl From<Option<Decimal>> for FieldValue<'_> {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Decimal)
    }
}

impl From<Option<f64>> for FieldValue<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Float)
    }
}

impl From<Option<DateTime<Utc>>> for FieldValue<'_> {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Timestamp)
    }
}

/// A single declarative check on one field.
///
/// Only [`Rule::Required`] looks at absent values; every other rule passes
/// when the field is absent. A rule applied to a value it cannot measure
/// (a length on a number, a range on text) fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// The field must hold a value.
    Required,
    /// Character count must lie in `[min, max]`; `max = None` is unbounded.
    ///
    /// With `allow_empty`, the empty string passes regardless of `min`.
    Length {
        min: usize,
        max: Option<usize>,
        allow_empty: bool,
    },
    /// Numeric value must lie in `[min, max]`, both inclusive and optional.
    Range {
        min: Option<Decimal>,
        max: Option<Decimal>,
    },
    /// Symbol must be a member of the set.
    OneOf(&'static [&'static str]),
}

impl Rule {
    pub fn length(min: usize, max: usize) -> Self {
        Rule::Length {
            min,
            max: Some(max),
            allow_empty: false,
        }
    }

    pub fn min_length(min: usize) -> Self {
        Rule::Length {
            min,
            max: None,
            allow_empty: false,
        }
    }

    pub fn range(min: impl Into<Decimal>, max: impl Into<Decimal>) -> Self {
        Rule::Range {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }

    pub fn at_least(min: impl Into<Decimal>) -> Self {
        Rule::Range {
            min: Some(min.into()),
            max: None,
        }
    }

    pub fn at_most(max: impl Into<Decimal>) -> Self {
        Rule::Range {
            min: None,
            max: Some(max.into()),
        }
    }

    /// Returns `true` when `value` satisfies the rule.
    pub fn check(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (Rule::Required, value) => !value.is_absent(),
            (_, FieldValue::Absent) => true,
            (
                Rule::Length {
                    min,
                    max,
                    allow_empty,
                },
                FieldValue::Text(text),
            ) => {
                if *allow_empty && text.is_empty() {
                    return true;
                }
                let len = text.chars().count();
                len >= *min && max.map_or(true, |max| len <= max)
            }
            (Rule::Range { min, max }, FieldValue::Integer(v)) => {
                in_decimal_range(Decimal::from(*v), min, max)
            }
            (Rule::Range { min, max }, FieldValue::Decimal(v)) => in_decimal_range(*v, min, max),
            (Rule::Range { min, max }, FieldValue::Float(v)) => in_float_range(*v, min, max),
            (Rule::OneOf(set), FieldValue::Symbol(symbol)) => set.iter().any(|m| m == symbol),
            (Rule::OneOf(set), FieldValue::Text(text)) => set.iter().any(|m| m == text),
            // A rule declared on a value of the wrong shape never holds.
            _ => false,
        }
    }

    /// The message reported when the rule fails, unless the catalog overrides it.
    pub fn default_message(&self) -> Cow<'static, str> {
        match self {
            Rule::Required => Cow::Borrowed("must not be null"),
            Rule::Length {
                min, max: Some(max), ..
            } => Cow::Owned(format!("size must be between {} and {}", min, max)),
            Rule::Length { min, max: None, .. } => {
                Cow::Owned(format!("size must be at least {}", min))
            }
            Rule::Range {
                min: Some(min),
                max: Some(max),
            } => Cow::Owned(format!("must be between {} and {}", min, max)),
            Rule::Range {
                min: Some(min),
                max: None,
            } => Cow::Owned(format!("must be greater than or equal to {}", min)),
            Rule::Range {
                min: None,
                max: Some(max),
            } => Cow::Owned(format!("must be less than or equal to {}", max)),
            Rule::Range {
                min: None,
                max: None,
            } => Cow::Borrowed("must be a number"),
            Rule::OneOf(set) => Cow::Owned(format!("must be one of [{}]", set.join(", "))),
        }
    }
}

fn in_decimal_range(value: Decimal, min: &Option<Decimal>, max: &Option<Decimal>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

// NaN never satisfies a bound.
fn in_float_range(value: f64, min: &Option<Decimal>, max: &Option<Decimal>) -> bool {
    if value.is_nan() {
        return false;
    }
    let above = match min.and_then(|min| min.to_f64()) {
        Some(min) => value >= min,
        None => true,
    };
    let below = match max.and_then(|max| max.to_f64()) {
        Some(max) => value <= max,
        None => true,
    };
    above && below
}

/// A rule paired with the message reported when it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub rule: Rule,
    pub message: Cow<'static, str>,
}

impl Constraint {
    pub fn new(rule: Rule) -> Self {
        let message = rule.default_message();
        Self { rule, message }
    }

    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }
}

impl From<Rule> for Constraint {
    fn from(rule: Rule) -> Self {
        Constraint::new(rule)
    }
}
