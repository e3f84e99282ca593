pub mod clients;
pub mod config;
pub mod models;
pub mod notify;
pub mod observability;
pub mod storage;
pub mod store;

pub use clients::{CatalogService, HttpStoreApi, StockService};
pub use config::Config;
pub use models::{Cart, CartItem, ProductRecord, StockRecord};
pub use notify::{Notifier, Severity, TracingNotifier};
pub use observability::init_tracing;
pub use storage::{CartStorage, FileCartStorage, MemoryCartStorage};
pub use store::{messages, CartStore};
