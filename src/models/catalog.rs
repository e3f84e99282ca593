use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CartItem;

/// Stock record returned by the stock lookup service.
///
/// Read-only to this crate: `amount` is how many units are currently
/// available to sell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub id: u64,
    pub amount: u32,
}

/// Product display attributes returned by the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub image: String,
}

impl ProductRecord {
    /// Turn a catalog record into a cart line with the given amount.
    pub fn into_cart_item(self, amount: u32) -> CartItem {
        CartItem {
            product_id: self.id,
            title: self.title,
            price: self.price,
            image: self.image,
            amount,
        }
    }
}
