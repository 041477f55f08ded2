use chrono::Utc;
use product_guard::catalog::product_catalog;
use product_guard::model::{Product, ProductStatus};
use product_guard::service::{ProductService, ServiceError};
use product_guard::store::mock::MockStore;
use product_guard::validation::Validator;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Service wired to a mock store, plus direct access to the validator.
struct Harness {
    validator: Validator<Product>,
    mock: MockStore,
    service: ProductService<MockStore>,
}

impl Harness {
    fn new() -> Self {
        let validator = Validator::new(Arc::new(product_catalog().expect("catalog")));
        let mock = MockStore::new();
        let service = ProductService::new(validator.clone(), mock.clone());
        Self {
            validator,
            mock,
            service,
        }
    }

    /// The product validates cleanly, reaches the store exactly once, and the
    /// store's answer is returned.
    async fn assert_saved(&self, product: Product) {
        let violations = self.validator.validate(&product);
        assert!(violations.is_empty(), "unexpected violations: {}", violations);

        let before = self.mock.calls();
        self.mock.expect_save().return_ok(product.clone());
        let saved = self.service.save(product.clone()).await.expect("save failed");

        assert_eq!(saved, product);
        assert_eq!(self.mock.calls(), before + 1);
        self.mock.verify();
    }

    /// The product yields exactly one violation, on `field`, and the store is
    /// never called.
    async fn assert_rejected(&self, product: Product, field: &str) {
        let violations = self.validator.validate(&product);
        assert_eq!(violations.len(), 1, "violations: {}", violations);
        assert_eq!(violations.first().unwrap().field(), field);

        let before = self.mock.calls();
        match self.service.save(product).await {
            Err(ServiceError::Validation(reported)) => assert_eq!(reported, violations),
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert_eq!(self.mock.calls(), before, "store must not be called");
    }
}

/// A product that satisfies every constraint.
fn sample() -> Product {
    Product::new()
        .id(1)
        .title("Valid Title")
        .rating(1)
        .quantity_in_stock(1)
        .price(Decimal::TEN)
        .status(ProductStatus::InStock)
        .date_added(Utc::now())
}

#[tokio::test]
async fn test_product_title() {
    let h = Harness::new();

    h.assert_saved(sample().title("abc")).await;
    h.assert_saved(sample().title("a".repeat(100))).await;

    h.assert_rejected(sample().title("ab"), "title").await;
    h.assert_rejected(sample().title("a".repeat(101)), "title").await;
    h.assert_rejected(sample().title(""), "title").await;
    h.assert_rejected(Product { title: None, ..sample() }, "title").await;
}

#[tokio::test]
async fn test_title_length_counts_characters() {
    let h = Harness::new();

    h.assert_saved(sample().title("ééé")).await;
    h.assert_saved(sample().title("😀".repeat(100))).await;
    h.assert_rejected(sample().title("😀".repeat(101)), "title").await;
}

#[tokio::test]
async fn test_keywords() {
    let h = Harness::new();

    h.assert_saved(sample()).await;
    h.assert_saved(sample().keywords("")).await;
    h.assert_saved(sample().keywords("a")).await;
    h.assert_saved(sample().keywords("a".repeat(200))).await;

    h.assert_rejected(sample().keywords("a".repeat(201)), "keywords").await;
}

#[tokio::test]
async fn test_description() {
    let h = Harness::new();

    h.assert_saved(sample()).await;
    // Empty passes even though 1..=49 characters fail.
    h.assert_saved(sample().description("")).await;
    h.assert_saved(sample().description("a".repeat(50))).await;
    h.assert_saved(sample().description("a".repeat(51))).await;

    h.assert_rejected(sample().description("a".repeat(49)), "description").await;
    h.assert_rejected(sample().description("a"), "description").await;
}

#[tokio::test]
async fn test_rating() {
    let h = Harness::new();

    h.assert_saved(Product { rating: None, ..sample() }).await;
    h.assert_saved(sample().rating(1)).await;
    h.assert_saved(sample().rating(10)).await;

    h.assert_rejected(sample().rating(0), "rating").await;
    h.assert_rejected(sample().rating(11), "rating").await;
}

#[tokio::test]
async fn test_price() {
    let h = Harness::new();

    h.assert_saved(sample().price(Decimal::from(1))).await;
    h.assert_saved(sample().price(Decimal::from(2))).await;
    h.assert_saved(sample().price(Decimal::from(9998))).await;
    h.assert_saved(sample().price(Decimal::from(9999))).await;
    h.assert_saved(sample().price(Decimal::new(4999, 2))).await;

    h.assert_rejected(sample().price(Decimal::new(99, 2)), "price").await;
    h.assert_rejected(sample().price(Decimal::from(10000)), "price").await;
    h.assert_rejected(sample().price(Decimal::from(-2)), "price").await;
    h.assert_rejected(Product { price: None, ..sample() }, "price").await;
}

#[tokio::test]
async fn test_quantity_in_stock() {
    let h = Harness::new();

    h.assert_saved(sample().quantity_in_stock(0)).await;
    h.assert_saved(sample().quantity_in_stock(1)).await;
    h.assert_saved(sample().quantity_in_stock(300)).await;

    h.assert_rejected(sample().quantity_in_stock(-1), "quantityInStock").await;
    h.assert_rejected(
        Product {
            quantity_in_stock: None,
            ..sample()
        },
        "quantityInStock",
    )
    .await;
}

#[tokio::test]
async fn test_product_status() {
    let h = Harness::new();

    for status in ProductStatus::ALL {
        h.assert_saved(sample().status(status)).await;
    }

    h.assert_rejected(Product { status: None, ..sample() }, "status").await;
}

#[tokio::test]
async fn test_weight() {
    let h = Harness::new();

    h.assert_saved(Product { weight: None, ..sample() }).await;
    h.assert_saved(sample().weight(0.0)).await;
    h.assert_saved(sample().weight(2.0)).await;
    h.assert_saved(sample().weight(5.5)).await;

    h.assert_rejected(sample().weight(-0.1), "weight").await;
}

#[tokio::test]
async fn test_dimensions() {
    let h = Harness::new();

    h.assert_saved(sample()).await;
    h.assert_saved(sample().dimensions("")).await;
    h.assert_saved(sample().dimensions("10x20x30 cm")).await;

    h.assert_rejected(sample().dimensions("a".repeat(51)), "dimensions").await;
}

#[tokio::test]
async fn test_date_added_is_required() {
    let h = Harness::new();

    h.assert_rejected(
        Product {
            date_added: None,
            ..sample()
        },
        "dateAdded",
    )
    .await;
}

#[tokio::test]
async fn test_id_is_not_validated() {
    let h = Harness::new();

    h.assert_saved(Product { id: None, ..sample() }).await;
    h.assert_saved(sample().id(-5)).await;
}

#[tokio::test]
async fn test_every_violation_is_reported_in_field_order() {
    let h = Harness::new();
    let product = Product::new()
        .title("ab")
        .keywords("k".repeat(201))
        .description("short")
        .rating(0)
        .quantity_in_stock(-1)
        .dimensions("d".repeat(51))
        .price(Decimal::ZERO)
        .weight(-1.0);

    let violations = h.validator.validate(&product);

    assert_eq!(
        violations.fields(),
        vec![
            "title",
            "keywords",
            "description",
            "rating",
            "quantityInStock",
            "dimensions",
            "price",
            "status",
            "weight",
            "dateAdded",
        ]
    );
    assert_eq!(violations.len(), 10);
    assert_eq!(
        violations.messages_by_field()[0],
        ("title", vec!["size must be between 3 and 100"])
    );

    let err = h.service.save(product).await.unwrap_err();
    assert_eq!(err.violations(), Some(&violations));
    assert_eq!(h.mock.calls(), 0);
}

#[tokio::test]
async fn test_empty_product_reports_required_fields_only() {
    let h = Harness::new();

    let violations = h.validator.validate(&Product::new());

    assert_eq!(
        violations.fields(),
        vec!["title", "quantityInStock", "price", "status", "dateAdded"]
    );
    assert!(violations.iter().all(|v| v.message() == "must not be null"));
}

#[tokio::test]
async fn test_validation_does_not_mutate_product() {
    let h = Harness::new();
    let product = sample().title("ab");
    let copy = product.clone();

    let _ = h.validator.validate(&product);
    let _ = h.validator.validate(&product);

    assert_eq!(product, copy);
}
