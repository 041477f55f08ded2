//! The constraint table for [`Product`].
//!
//! | Field | Rules |
//! |---|---|
//! | `title` | required, 3..=100 chars |
//! | `keywords` | 0..=200 chars |
//! | `description` | empty, or at least 50 chars |
//! | `rating` | 1..=10 |
//! | `quantityInStock` | required, >= 0 |
//! | `dimensions` | 0..=50 chars |
//! | `price` | required, 1..=9999 |
//! | `status` | required, one of the [`ProductStatus`] symbols |
//! | `weight` | >= 0 |
//! | `dateAdded` | required |
//!
//! The `description` rule lets the empty string through while rejecting 1 to
//! 49 characters. That is almost certainly an authoring slip in the original
//! rule set, but existing data depends on it, so it stays.

use super::{CatalogError, ConstraintCatalog, FieldValue, Rule};
use crate::model::{Product, ProductStatus};

fn title(p: &Product) -> FieldValue<'_> {
    p.title.as_deref().into()
}

fn keywords(p: &Product) -> FieldValue<'_> {
    p.keywords.as_deref().into()
}

fn description(p: &Product) -> FieldValue<'_> {
    p.description.as_deref().into()
}

fn rating(p: &Product) -> FieldValue<'_> {
    p.rating.into()
}

fn quantity_in_stock(p: &Product) -> FieldValue<'_> {
    p.quantity_in_stock.into()
}

fn dimensions(p: &Product) -> FieldValue<'_> {
    p.dimensions.as_deref().into()
}

fn price(p: &Product) -> FieldValue<'_> {
    p.price.into()
}

fn status(p: &Product) -> FieldValue<'_> {
    p.status.map_or(FieldValue::Absent, |s| FieldValue::Symbol(s.as_str()))
}

fn weight(p: &Product) -> FieldValue<'_> {
    p.weight.into()
}

fn date_added(p: &Product) -> FieldValue<'_> {
    p.date_added.into()
}

/// Builds the catalog every [`Product`] is validated against.
pub fn product_catalog() -> Result<ConstraintCatalog<Product>, CatalogError> {
    ConstraintCatalog::builder()
        .field("title", title)
        .rule(Rule::Required)
        .rule(Rule::length(3, 100))
        .field("keywords", keywords)
        .rule(Rule::length(0, 200))
        .field("description", description)
        .rule(Rule::Length {
            min: 50,
            max: None,
            allow_empty: true,
        })
        .field("rating", rating)
        .rule(Rule::range(1, 10))
        .field("quantityInStock", quantity_in_stock)
        .rule(Rule::Required)
        .rule(Rule::at_least(0))
        .field("dimensions", dimensions)
        .rule(Rule::length(0, 50))
        .field("price", price)
        .rule(Rule::Required)
        .rule(Rule::range(1, 9999))
        .field("status", status)
        .rule(Rule::Required)
        .rule(Rule::OneOf(ProductStatus::SYMBOLS))
        .field("weight", weight)
        .rule(Rule::at_least(0))
        .field("dateAdded", date_added)
        .rule(Rule::Required)
        .build()
}
