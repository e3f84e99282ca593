use shopcart_rs::models::StorageError;
use shopcart_rs::{Cart, CartStorage, FileCartStorage};

mod common;

use common::{temp_slot_path, test_item};

#[tokio::test]
async fn test_missing_file_loads_as_never_written() {
    let storage = FileCartStorage::new(temp_slot_path());

    assert!(storage.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_then_load_round_trip() {
    let path = temp_slot_path();
    let storage = FileCartStorage::new(&path);
    let cart = Cart::new().with_item(test_item(1, 2)).with_item(test_item(7, 4));

    storage.save(&cart).await.unwrap();
    let loaded = storage.load().await.unwrap();

    assert_eq!(loaded, Some(cart));
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_persisted_shape_is_display_oriented_array() {
    let path = temp_slot_path();
    let storage = FileCartStorage::new(&path);

    storage
        .save(&Cart::new().with_item(test_item(3, 1)))
        .await
        .unwrap();

    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert!(json.is_array());
    assert_eq!(json[0]["id"], 3);
    assert_eq!(json[0]["amount"], 1);
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_wholesale_overwrite_last_writer_wins() {
    let path = temp_slot_path();
    let storage = FileCartStorage::new(&path);

    storage
        .save(&Cart::new().with_item(test_item(1, 1)))
        .await
        .unwrap();
    storage
        .save(&Cart::new().with_item(test_item(2, 5)))
        .await
        .unwrap();

    let loaded = storage.load().await.unwrap().unwrap();
    assert!(!loaded.contains(1));
    assert_eq!(loaded.amount_of(2), 5);
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_corrupted_slot_is_a_serialization_error() {
    let path = temp_slot_path();
    tokio::fs::write(&path, "{ definitely not a cart").await.unwrap();

    let storage = FileCartStorage::new(&path);
    let result = storage.load().await;

    assert!(matches!(result, Err(StorageError::Serialization { .. })));
    tokio::fs::remove_file(&path).await.unwrap();
}
