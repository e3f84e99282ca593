use async_trait::async_trait;
use tokio::sync::Mutex;

use super::CartStorage;
use crate::models::{Cart, StorageResult};

/// In-process implementation of the cart slot.
///
/// Useful for tests and for embedding the store without a filesystem.
#[derive(Default)]
pub struct MemoryCartStorage {
    slot: Mutex<Option<Cart>>,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with an existing cart.
    pub fn with_cart(cart: Cart) -> Self {
        Self {
            slot: Mutex::new(Some(cart)),
        }
    }
}

#[async_trait]
impl CartStorage for MemoryCartStorage {
    async fn load(&self) -> StorageResult<Option<Cart>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, cart: &Cart) -> StorageResult<()> {
        *self.slot.lock().await = Some(cart.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CartItem;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_empty_slot_loads_none() {
        let storage = MemoryCartStorage::new();

        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let storage = MemoryCartStorage::new();
        let cart = Cart::new().with_item(CartItem {
            product_id: 1,
            title: "Sneaker".to_string(),
            price: dec!(99.90),
            image: "sneaker.jpg".to_string(),
            amount: 2,
        });

        storage.save(&cart).await.unwrap();
        let loaded = storage.load().await.unwrap();

        assert_eq!(loaded, Some(cart));
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let seed = Cart::new().with_item(CartItem {
            product_id: 1,
            title: "Sneaker".to_string(),
            price: dec!(99.90),
            image: "sneaker.jpg".to_string(),
            amount: 1,
        });
        let storage = MemoryCartStorage::with_cart(seed);

        storage.save(&Cart::new()).await.unwrap();

        assert_eq!(storage.load().await.unwrap(), Some(Cart::new()));
    }
}
