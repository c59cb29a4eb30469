//! In-memory repository tests, including concurrent access.

use std::sync::Arc;

use loja_api::domain::{Address, Product, User};
use loja_api::errors::AppError;
use loja_api::infra::{InMemoryRepository, ShopRepository, Store};

fn user(id: i64) -> User {
    User::new(id, format!("Cliente {id}"), format!("c{id}@x.com"), "abc")
}

#[tokio::test]
async fn test_can_create_user_reflects_store() {
    let repo = InMemoryRepository::new();

    assert!(repo.can_create_user(1, "c1@x.com", "abc").await);
    repo.create_user(user(1)).await.unwrap();
    assert!(!repo.can_create_user(1, "c1@x.com", "abc").await);
    assert!(!repo.can_create_user(2, "c2x.com", "abc").await);
    assert!(!repo.can_create_user(2, "c2@x.com", "ab").await);
}

#[tokio::test]
async fn test_with_store_keeps_contents() {
    let mut store = Store::new();
    store.create_user(user(1)).unwrap();
    store
        .create_product(Product::new(10, "Caneca", "", 5.0))
        .unwrap();

    let repo = InMemoryRepository::with_store(store);

    assert_eq!(repo.find_user(1).await, Some(user(1)));
    assert!(repo.find_product(10).await.is_some());
}

#[tokio::test]
async fn test_returned_values_are_snapshots() {
    let repo = InMemoryRepository::new();
    repo.create_user(user(1)).await.unwrap();
    repo.create_product(Product::new(10, "Caneca", "", 5.0))
        .await
        .unwrap();
    repo.add_to_cart(1, 10).await.unwrap();

    let snapshot = repo.find_cart(1).await.unwrap();
    repo.add_to_cart(1, 10).await.unwrap();

    assert_eq!(snapshot.item_count, 1);
    assert_eq!(repo.find_cart(1).await.unwrap().item_count, 2);
}

#[tokio::test]
async fn test_remove_product_from_all_carts() {
    let repo = InMemoryRepository::new();
    repo.create_user(user(1)).await.unwrap();
    repo.create_user(user(2)).await.unwrap();
    repo.create_product(Product::new(10, "Caneca", "", 5.0))
        .await
        .unwrap();
    repo.add_to_cart(1, 10).await.unwrap();
    repo.add_to_cart(2, 10).await.unwrap();
    repo.add_to_cart(2, 10).await.unwrap();

    assert_eq!(repo.remove_product_from_all_carts(10).await, 3);
    assert_eq!(repo.cart_summary(2).await.unwrap().total_price, 0.0);
}

#[tokio::test]
async fn test_addresses_missing_user() {
    let repo = InMemoryRepository::new();
    let address = Address {
        street: "Rua A".to_string(),
        postal_code: "0".to_string(),
        city: "C".to_string(),
        state: "S".to_string(),
    };

    assert_eq!(
        repo.create_address(1, address).await,
        Err(AppError::not_found("User"))
    );
    assert_eq!(repo.find_addresses(1).await, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_keep_cart_consistent() {
    let repo = Arc::new(InMemoryRepository::new());
    repo.create_user(user(1)).await.unwrap();
    repo.create_product(Product::new(10, "Caneca", "", 2.0))
        .await
        .unwrap();
    repo.create_product(Product::new(20, "Prato", "", 3.0))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..100 {
        let repo = repo.clone();
        let product_id = if i % 2 == 0 { 10 } else { 20 };
        handles.push(tokio::spawn(async move {
            repo.add_to_cart(1, product_id).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let cart = repo.find_cart(1).await.unwrap();
    assert_eq!(cart.products.len(), 100);
    assert_eq!(cart.item_count, 100);
    assert_eq!(cart.total_price, 250.0);
    assert_eq!(cart.total_price, cart.computed_total());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_creates_admit_one() {
    let repo = Arc::new(InMemoryRepository::new());

    let mut handles = Vec::new();
    for _ in 0..20 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move { repo.create_user(user(7)).await }));
    }

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.find_users_by_first_name("Cliente").await.len(), 1);
}
