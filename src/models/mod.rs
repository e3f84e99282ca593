// Re-export all model types
pub use self::cart::*;
pub use self::catalog::*;
pub use self::errors::*;

mod cart;
mod catalog;
mod errors;
