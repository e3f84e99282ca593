// Clients module - remote stock and catalog lookups

pub mod store_api;

pub use store_api::{CatalogService, HttpStoreApi, StockService};
