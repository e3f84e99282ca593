#![allow(dead_code)] // not every test binary uses every helper

use std::path::PathBuf;
use std::sync::Mutex;

use rust_decimal_macros::dec;
use shopcart_rs::{CartItem, Notifier, Severity};

/// Notifier that records every message for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn recorded(&self) -> Vec<(Severity, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

/// Build a cart line with deterministic display fields.
pub fn test_item(product_id: u64, amount: u32) -> CartItem {
    CartItem {
        product_id,
        title: format!("Product {product_id}"),
        price: dec!(139.90),
        image: format!("product-{product_id}.jpg"),
        amount,
    }
}

/// Unique throwaway path for a file-backed cart slot.
pub fn temp_slot_path() -> PathBuf {
    std::env::temp_dir().join(format!("shopcart-test-{}.json", uuid::Uuid::new_v4()))
}
