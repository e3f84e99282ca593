use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::models::{ClientError, ClientResult, ProductRecord, StockRecord};

/// Trait defining the interface for stock availability lookups
#[async_trait]
pub trait StockService: Send + Sync {
    /// Fetch the current stock record for a product
    async fn stock_for(&self, product_id: u64) -> ClientResult<StockRecord>;
}

/// Trait defining the interface for product catalog lookups
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch display attributes for a product
    async fn product(&self, product_id: u64) -> ClientResult<ProductRecord>;
}

/// HTTP client for the storefront REST API.
///
/// Serves both lookup traits from one base URL: stock records live under
/// `/stock/{id}` and catalog records under `/products/{id}`. Calls carry the
/// configured request timeout and are never retried; a fault surfaces once to
/// the caller.
pub struct HttpStoreApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStoreApi {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Get the configured base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl StockService for HttpStoreApi {
    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn stock_for(&self, product_id: u64) -> ClientResult<StockRecord> {
        let stock: StockRecord = self.get_json(&format!("/stock/{product_id}")).await?;
        info!(available = stock.amount, "Stock record fetched");
        Ok(stock)
    }
}

#[async_trait]
impl CatalogService for HttpStoreApi {
    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn product(&self, product_id: u64) -> ClientResult<ProductRecord> {
        let product: ProductRecord = self.get_json(&format!("/products/{product_id}")).await?;
        info!(title = %product.title, "Product record fetched");
        Ok(product)
    }
}
