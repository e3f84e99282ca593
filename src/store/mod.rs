// Store module - cart state management

pub mod cart_store;

pub use cart_store::{messages, CartStore};
