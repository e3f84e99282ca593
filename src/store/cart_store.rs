use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, error, instrument, warn};

use crate::clients::{CatalogService, StockService};
use crate::models::{Cart, StoreError, StoreResult};
use crate::notify::{Notifier, Severity};
use crate::storage::CartStorage;

/// User-visible notification literals produced by the store.
pub mod messages {
    /// Requested or needed quantity exceeds available stock (add and update).
    pub const OUT_OF_STOCK: &str = "Requested quantity out of stock";
    /// Generic failure while adding a product.
    pub const ADD_FAILED: &str = "Failed to add product";
    /// Generic failure while removing a product.
    pub const REMOVE_FAILED: &str = "Failed to remove product";
    /// Generic failure while updating a line's quantity.
    pub const UPDATE_FAILED: &str = "Failed to update quantity";
}

/// Owns the cart state for one session.
///
/// Every mutation validates against the remote stock service, builds a fresh
/// snapshot, persists it to the slot, and only then replaces the in-memory
/// cart and publishes to subscribers. A failed persist abandons the mutation,
/// so the in-memory cart and the slot never diverge.
///
/// Public operations return `()` regardless of outcome; feedback reaches the
/// user solely through the injected [`Notifier`]. Mutations are serialized
/// behind an async mutex, so concurrent callers observe one operation at a
/// time even on a multi-threaded runtime.
pub struct CartStore {
    state: Mutex<Cart>,
    snapshot_tx: watch::Sender<Cart>,
    storage: Arc<dyn CartStorage>,
    stock: Arc<dyn StockService>,
    catalog: Arc<dyn CatalogService>,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Create a store by reading the persisted slot once.
    ///
    /// An absent slot starts an empty cart; an unreadable one is reported and
    /// treated the same way rather than failing session startup.
    pub async fn load(
        storage: Arc<dyn CartStorage>,
        stock: Arc<dyn StockService>,
        catalog: Arc<dyn CatalogService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let initial = match storage.load().await {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "Persisted cart is unreadable, starting with an empty cart");
                Cart::new()
            }
        };

        let (snapshot_tx, _) = watch::channel(initial.clone());

        Self {
            state: Mutex::new(initial),
            snapshot_tx,
            storage,
            stock,
            catalog,
            notifier,
        }
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> Cart {
        self.snapshot_tx.borrow().clone()
    }

    /// Subscribe to snapshot replacements.
    ///
    /// The receiver holds the latest snapshot immediately and observes every
    /// subsequent successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.snapshot_tx.subscribe()
    }

    /// Add one unit of a product to the cart.
    ///
    /// A product not yet in the cart needs at least one unit in stock and is
    /// appended with amount 1 using the catalog's display attributes; a
    /// product already present needs stock for its current amount plus one.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_product(&self, product_id: u64) {
        let mut cart = self.state.lock().await;

        match self.next_cart_with_added(&cart, product_id).await {
            Ok(next) => self.commit(&mut cart, next, messages::ADD_FAILED).await,
            Err(StoreError::InsufficientStock { requested, available }) => {
                warn!(requested, available, "Add rejected, insufficient stock");
                self.notifier.notify(Severity::Error, messages::OUT_OF_STOCK);
            }
            Err(e) => {
                error!(error = %e, "Failed to add product");
                self.notifier.notify(Severity::Error, messages::ADD_FAILED);
            }
        }
    }

    /// Remove a product's line from the cart.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_product(&self, product_id: u64) {
        let mut cart = self.state.lock().await;

        if !cart.contains(product_id) {
            let e = StoreError::ItemNotFound { product_id };
            error!(error = %e, "Failed to remove product");
            self.notifier.notify(Severity::Error, messages::REMOVE_FAILED);
            return;
        }

        let next = cart.without(product_id);
        self.commit(&mut cart, next, messages::REMOVE_FAILED).await;
    }

    /// Set a product's line to an exact amount.
    ///
    /// Non-positive amounts are ignored without feedback, an explicit policy
    /// rather than an omission. A product missing from the cart is a silent
    /// no-op that still persists the unchanged list.
    #[instrument(skip(self), fields(product_id = %product_id, amount = amount))]
    pub async fn update_product_amount(&self, product_id: u64, amount: i64) {
        if amount <= 0 {
            debug!("Ignoring non-positive amount update");
            return;
        }
        let requested = u32::try_from(amount).unwrap_or(u32::MAX);

        let mut cart = self.state.lock().await;

        match self.next_cart_with_amount(&cart, product_id, requested).await {
            Ok(next) => self.commit(&mut cart, next, messages::UPDATE_FAILED).await,
            Err(StoreError::InsufficientStock { requested, available }) => {
                warn!(requested, available, "Update rejected, insufficient stock");
                self.notifier.notify(Severity::Error, messages::OUT_OF_STOCK);
            }
            Err(e) => {
                error!(error = %e, "Failed to update quantity");
                self.notifier
                    .notify(Severity::Error, messages::UPDATE_FAILED);
            }
        }
    }

    async fn next_cart_with_added(&self, cart: &Cart, product_id: u64) -> StoreResult<Cart> {
        let stock = self.stock.stock_for(product_id).await?;

        match cart.get(product_id) {
            Some(line) => {
                let wanted = line.amount + 1;
                if stock.amount < wanted {
                    return Err(StoreError::InsufficientStock {
                        requested: wanted,
                        available: stock.amount,
                    });
                }
                Ok(cart.with_amount(product_id, wanted))
            }
            None => {
                if stock.amount < 1 {
                    return Err(StoreError::InsufficientStock {
                        requested: 1,
                        available: stock.amount,
                    });
                }
                let product = self.catalog.product(product_id).await?;
                Ok(cart.with_item(product.into_cart_item(1)))
            }
        }
    }

    async fn next_cart_with_amount(
        &self,
        cart: &Cart,
        product_id: u64,
        requested: u32,
    ) -> StoreResult<Cart> {
        let stock = self.stock.stock_for(product_id).await?;

        if stock.amount < requested {
            return Err(StoreError::InsufficientStock {
                requested,
                available: stock.amount,
            });
        }

        Ok(cart.with_amount(product_id, requested))
    }

    /// Persist `next`, then replace the in-memory cart and publish it.
    async fn commit(&self, cart: &mut Cart, next: Cart, failure_message: &str) {
        if let Err(e) = self.storage.save(&next).await {
            error!(error = %e, "Failed to persist cart snapshot, abandoning mutation");
            self.notifier.notify(Severity::Error, failure_message);
            return;
        }

        *cart = next.clone();
        self.snapshot_tx.send_replace(next);
    }
}
