// Storage module - the persistent cart slot

pub mod file;
pub mod memory;

use async_trait::async_trait;

use crate::models::{Cart, StorageResult};

/// Trait defining the interface for the persistent cart slot.
///
/// One named slot holding the serialized cart list; read once at startup and
/// overwritten wholesale on every successful mutation. Last writer wins.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Load the persisted cart, `None` if the slot has never been written
    async fn load(&self) -> StorageResult<Option<Cart>>;

    /// Overwrite the slot with the given cart snapshot
    async fn save(&self, cart: &Cart) -> StorageResult<()>;
}

pub use file::FileCartStorage;
pub use memory::MemoryCartStorage;
