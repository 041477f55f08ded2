use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a product offered for persistence.
///
/// Every field is optional so that an absent value can be told apart from an
/// empty one. Whether a product is acceptable is decided by the
/// [`Validator`](crate::validation::Validator) against the
/// [`product_catalog`](crate::catalog::product_catalog); the struct itself
/// carries no validation state.
///
/// # Example
/// ```
/// use product_guard::model::{Product, ProductStatus};
/// use rust_decimal::Decimal;
///
/// let product = Product::new()
///     .title("Desk lamp")
///     .quantity_in_stock(12)
///     .price(Decimal::new(4999, 2))
///     .status(ProductStatus::InStock)
///     .date_added(chrono::Utc::now());
/// assert!(product.id.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the store on first save.
    pub id: Option<i64>,
    pub title: Option<String>,
    pub keywords: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i32>,
    pub quantity_in_stock: Option<i32>,
    pub dimensions: Option<String>,
    pub price: Option<Decimal>,
    pub status: Option<ProductStatus>,
    pub weight: Option<f64>,
    pub date_added: Option<DateTime<Utc>>,
}

impl Product {
    /// Creates an empty product with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn quantity_in_stock(mut self, quantity: i32) -> Self {
        self.quantity_in_stock = Some(quantity);
        self
    }

    pub fn dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.dimensions = Some(dimensions.into());
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn status(mut self, status: ProductStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }
}

/// Availability of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    InStock,
    OutOfStock,
    Preorder,
    Discontinued,
}

impl ProductStatus {
    /// Every status, in declaration order.
    pub const ALL: [ProductStatus; 4] = [
        ProductStatus::InStock,
        ProductStatus::OutOfStock,
        ProductStatus::Preorder,
        ProductStatus::Discontinued,
    ];

    /// Symbols of [`ProductStatus::ALL`], as they appear on the wire.
    pub const SYMBOLS: &'static [&'static str] =
        &["IN_STOCK", "OUT_OF_STOCK", "PREORDER", "DISCONTINUED"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::InStock => "IN_STOCK",
            ProductStatus::OutOfStock => "OUT_OF_STOCK",
            ProductStatus::Preorder => "PREORDER",
            ProductStatus::Discontinued => "DISCONTINUED",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown product status: {}", s))
    }
}
