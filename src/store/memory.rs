//! # In-Memory Store
//!
//! A [`ProductStore`] backed by an actor.
//!
//! [`StoreActor`] is the "server" half: it owns the product map and the
//! receiving end of the channel and processes requests one at a time, so the
//! map needs no lock. [`InMemoryStore`] is the cloneable "client" half that
//! sends requests and awaits the reply on a oneshot channel.
//!
//! When every [`InMemoryStore`] handle is dropped the channel closes and
//! [`StoreActor::run`] returns.

use super::{ProductStore, StoreError};
use crate::config::StoreConfig;
use crate::model::Product;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Requests understood by [`StoreActor`].
#[derive(Debug)]
pub enum StoreRequest {
    Save {
        product: Product,
        respond_to: Response<Product>,
    },
    Get {
        id: i64,
        respond_to: Response<Option<Product>>,
    },
}

/// The actor owning the stored products.
pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    products: HashMap<i64, Product>,
    next_id: Option<i64>,
}

impl StoreActor {
    /// Runs the actor's event loop until every client is dropped.
    pub async fn run(mut self) {
        info!(next_id = ?self.next_id, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save {
                    product,
                    respond_to,
                } => {
                    debug!(?product, "Save");
                    let result = self.save(product);
                    match &result {
                        Ok(stored) => info!(id = ?stored.id, size = self.products.len(), "Saved"),
                        Err(e) => warn!(error = %e, "Save failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Get { id, respond_to } => {
                    let product = self.products.get(&id).cloned();
                    debug!(id, found = product.is_some(), "Get");
                    let _ = respond_to.send(Ok(product));
                }
            }
        }

        info!(size = self.products.len(), "Shutdown");
    }

    // Products without an id get the next free one; products with an id
    // replace whatever is stored under it.
    fn save(&mut self, mut product: Product) -> Result<Product, StoreError> {
        let id = match product.id {
            Some(id) => id,
            None => {
                let id = self.allocate_id()?;
                product.id = Some(id);
                id
            }
        };
        if self.next_id.is_some_and(|next| id >= next) {
            self.next_id = id.checked_add(1);
        }
        self.products.insert(id, product.clone());
        Ok(product)
    }

    // `next_id` is `None` once the id space is used up.
    fn allocate_id(&mut self) -> Result<i64, StoreError> {
        loop {
            let id = self
                .next_id
                .ok_or_else(|| StoreError::Backend("id space exhausted".to_string()))?;
            self.next_id = id.checked_add(1);
            if !self.products.contains_key(&id) {
                return Ok(id);
            }
        }
    }
}

/// Cloneable handle to a running [`StoreActor`].
#[derive(Clone)]
pub struct InMemoryStore {
    sender: mpsc::Sender<StoreRequest>,
}

impl InMemoryStore {
    /// Creates the actor and its first handle. Spawn [`StoreActor::run`] to start it.
    pub fn new(config: &StoreConfig) -> (StoreActor, InMemoryStore) {
        let (sender, receiver) = mpsc::channel(config.buffer_size.max(1));
        let actor = StoreActor {
            receiver,
            products: HashMap::new(),
            next_id: Some(config.first_id),
        };
        (actor, InMemoryStore { sender })
    }

    /// Fetches a stored product by id.
    pub async fn get(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Save {
                product,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}
