use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::{info, instrument};

use super::CartStorage;
use crate::models::{Cart, StorageResult};

/// File-backed implementation of the cart slot.
///
/// The slot is a single JSON file holding the serialized cart array. A
/// missing file means the slot has never been written; unparsable content is
/// reported as a serialization error and left for the store to handle.
pub struct FileCartStorage {
    path: PathBuf,
}

impl FileCartStorage {
    /// Create a file-backed slot at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the slot path (for testing)
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl CartStorage for FileCartStorage {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> StorageResult<Option<Cart>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Cart slot not found, nothing persisted yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let cart: Cart = serde_json::from_str(&contents)?;
        info!(lines = cart.len(), "Cart loaded from slot");
        Ok(Some(cart))
    }

    #[instrument(skip(self, cart), fields(path = %self.path.display(), lines = cart.len()))]
    async fn save(&self, cart: &Cart) -> StorageResult<()> {
        let json = serde_json::to_string(cart)?;
        fs::write(&self.path, json).await?;
        info!("Cart slot overwritten");
        Ok(())
    }
}
