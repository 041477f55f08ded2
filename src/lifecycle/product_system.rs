use crate::catalog::{product_catalog, CatalogError};
use crate::config::StoreConfig;
use crate::service::ProductService;
use crate::store::InMemoryStore;
use crate::validation::Validator;
use std::sync::Arc;
use tracing::{error, info};

/// Runtime wiring for the product service backed by the in-memory store.
///
/// `ProductSystem` is responsible for:
/// - **Startup**: building the constraint catalog once and sharing it with the validator
/// - **Lifecycle Management**: spawning the store actor and stopping it on shutdown
/// - **Dependency Wiring**: handing the store to the service
///
/// # Example
///
/// ```ignore
/// let system = ProductSystem::new(StoreConfig::from_env())?;
///
/// let saved = system.service().save(product).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct ProductSystem {
    service: Arc<ProductService<InMemoryStore>>,
    store: InMemoryStore,
    handle: tokio::task::JoinHandle<()>,
}

impl ProductSystem {
    /// Builds the catalog, starts the store actor and wires the service.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: StoreConfig) -> Result<Self, CatalogError> {
        let catalog = Arc::new(product_catalog()?);
        info!(fields = catalog.len(), "Constraint catalog built");

        let (actor, store) = InMemoryStore::new(&config);
        let handle = tokio::spawn(actor.run());

        let service = ProductService::new(Validator::new(catalog), store.clone());

        Ok(Self {
            service: Arc::new(service),
            store,
            handle,
        })
    }

    /// The shared service. Clone the `Arc` to use it from other tasks.
    pub fn service(&self) -> &Arc<ProductService<InMemoryStore>> {
        &self.service
    }

    /// Direct handle to the store, for inspection.
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the service and store handles closes the actor's channel; the
    /// actor then drains and exits. Service clones held elsewhere keep the
    /// actor alive until they are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the store actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.service);
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
