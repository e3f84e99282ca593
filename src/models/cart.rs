use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product line in the cart with its requested quantity.
///
/// The serialized shape is the display-oriented `{id, title, price, image,
/// amount}` record that the persistent slot and the UI both consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "id")]
    pub product_id: u64,
    pub title: String,
    pub price: Decimal,
    pub image: String,
    pub amount: u32,
}

/// Ordered list of cart line items.
///
/// At most one entry per `product_id`, and every entry carries `amount >= 1`;
/// zero-amount entries are removed, never stored. Serializes as a bare JSON
/// array of items.
///
/// Every mutation helper is a copy-on-write builder: it leaves `self` intact
/// and returns the next snapshot, so a snapshot handed to subscribers can
/// never be aliased by a later operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build the next snapshot with `item` appended.
    pub fn with_item(&self, item: CartItem) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// Build the next snapshot with the given product's amount replaced.
    ///
    /// A `product_id` that is not in the cart yields an identical snapshot.
    pub fn with_amount(&self, product_id: u64, amount: u32) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.product_id == product_id {
                    CartItem { amount, ..item.clone() }
                } else {
                    item.clone()
                }
            })
            .collect();
        Self { items }
    }

    /// Build the next snapshot with the given product removed.
    pub fn without(&self, product_id: u64) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.product_id != product_id)
            .cloned()
            .collect();
        Self { items }
    }

    /// Get a specific line item.
    pub fn get(&self, product_id: u64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, product_id: u64) -> bool {
        self.items.iter().any(|item| item.product_id == product_id)
    }

    /// Get the current amount for a product, 0 if absent.
    pub fn amount_of(&self, product_id: u64) -> u32 {
        self.get(product_id).map(|item| item.amount).unwrap_or(0)
    }

    /// Total number of units across all lines.
    pub fn total_units(&self) -> u32 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Total price of the cart.
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price * Decimal::from(item.amount))
            .sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the line items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }
}

impl CartItem {
    /// Total price for this line (`price * amount`).
    pub fn line_price(&self) -> Decimal {
        self.price * Decimal::from(self.amount)
    }
}
