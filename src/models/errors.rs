use thiserror::Error;

/// Store-level errors that can occur during cart operations.
///
/// None of these reach the caller of a public `CartStore` operation; they are
/// mapped to user-visible notifications at the operation boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Insufficient stock: requested={requested}, available={available}")]
    InsufficientStock { requested: u32, available: u32 },

    #[error("Cart item not found: product_id={product_id}")]
    ItemNotFound { product_id: u64 },

    #[error("Lookup service error: {source}")]
    Client {
        #[from]
        source: ClientError,
    },

    #[error("Cart storage error: {source}")]
    Storage {
        #[from]
        source: StorageError,
    },
}

/// Errors from the remote stock and catalog lookup services.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },

    #[error("Unexpected response status: {status}")]
    UnexpectedStatus { status: u16 },
}

/// Errors from the persistent cart slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for lookup service calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = StoreError::InsufficientStock {
            requested: 5,
            available: 1,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient stock: requested=5, available=1"
        );

        let error = StoreError::ItemNotFound { product_id: 42 };
        assert_eq!(error.to_string(), "Cart item not found: product_id=42");
    }

    #[test]
    fn test_storage_error_from_serde() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

        let storage_error: StorageError = json_error.into();
        assert!(matches!(storage_error, StorageError::Serialization { .. }));

        let store_error: StoreError = storage_error.into();
        assert!(matches!(store_error, StoreError::Storage { .. }));
    }

    #[test]
    fn test_client_error_wraps_into_store_error() {
        let client_error = ClientError::UnexpectedStatus { status: 404 };
        let store_error: StoreError = client_error.into();

        assert!(matches!(store_error, StoreError::Client { .. }));
        assert!(store_error.to_string().contains("404"));
    }
}
