//! Demo: save one valid and one invalid product through the service.

use chrono::Utc;
use product_guard::config::StoreConfig;
use product_guard::lifecycle::{setup_tracing, ProductSystem};
use product_guard::model::{Product, ProductStatus};
use product_guard::service::ServiceError;
use rust_decimal::Decimal;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let system = ProductSystem::new(StoreConfig::from_env()).map_err(|e| e.to_string())?;

    let lamp = Product::new()
        .title("Desk lamp")
        .keywords("lighting, office")
        .quantity_in_stock(12)
        .price(Decimal::new(4999, 2))
        .status(ProductStatus::InStock)
        .weight(1.2)
        .date_added(Utc::now());

    let span = tracing::info_span!("valid_product");
    let saved = async { system.service().save(lamp).await.map_err(|e| e.to_string()) }
        .instrument(span)
        .await?;
    info!(id = ?saved.id, "Product stored");

    let broken = Product::new()
        .title("ab")
        .description("too short")
        .rating(11)
        .price(Decimal::new(99, 2))
        .date_added(Utc::now());

    let span = tracing::info_span!("invalid_product");
    match system.service().save(broken).instrument(span).await {
        Err(ServiceError::Validation(violations)) => {
            for (field, messages) in violations.messages_by_field() {
                warn!(field, ?messages, "Violation");
            }
        }
        Err(e) => return Err(e.to_string()),
        Ok(product) => return Err(format!("Invalid product was stored: {:?}", product)),
    }

    system.shutdown().await
}
