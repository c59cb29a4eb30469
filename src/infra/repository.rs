//! Shop repository - Data access abstraction over the store.
//!
//! `InMemoryRepository` holds the single `Store` of the process behind a
//! read/write lock. Each method acquires the lock exactly once, so a
//! multi-step mutation such as append-then-recompute is never observed half
//! applied.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::Store;
use crate::domain::{Address, Cart, CartSummary, EmailEntry, Product, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository trait for dependency injection.
///
/// Lookups return `None` when nothing matches; mutations return the reason
/// they were refused.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ShopRepository: Send + Sync {
    /// Find user by ID
    async fn find_user(&self, id: i64) -> Option<User>;

    /// Find users whose first name token equals `name`
    async fn find_users_by_first_name(&self, name: &str) -> Vec<User>;

    /// Emails of users in `domain`; `NotFound` when there are none
    async fn users_sharing_domain(&self, domain: &str) -> AppResult<Vec<EmailEntry>>;

    /// Whether a user with these attributes would be accepted
    async fn can_create_user(&self, id: i64, email: &str, password: &str) -> bool;

    /// Create a new user
    async fn create_user(&self, user: User) -> AppResult<()>;

    /// Delete user with their cart and addresses
    async fn delete_user(&self, id: i64) -> AppResult<()>;

    /// Find product by ID
    async fn find_product(&self, id: i64) -> Option<Product>;

    /// Create a new product
    async fn create_product(&self, product: Product) -> AppResult<()>;

    /// Delete product and remove it from all carts
    async fn delete_product(&self, id: i64) -> AppResult<()>;

    /// Remove every entry of a product from every cart
    async fn remove_product_from_all_carts(&self, product_id: i64) -> usize;

    /// Addresses of a user, `None` without an address book
    async fn find_addresses(&self, user_id: i64) -> Option<Vec<Address>>;

    /// Append an address for an existing user
    async fn create_address(&self, user_id: i64, address: Address) -> AppResult<()>;

    /// Find the cart of a user
    async fn find_cart(&self, user_id: i64) -> Option<Cart>;

    /// Add a product to the user's cart
    async fn add_to_cart(&self, user_id: i64, product_id: i64) -> AppResult<()>;

    /// Item count and recomputed total of the user's cart
    async fn cart_summary(&self, user_id: i64) -> Option<CartSummary>;

    /// Delete the user's cart
    async fn delete_cart(&self, user_id: i64) -> AppResult<()>;
}

/// Concrete implementation of ShopRepository over a locked `Store`
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    store: RwLock<Store>,
}

impl InMemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already populated store
    pub fn with_store(store: Store) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}

#[async_trait]
impl ShopRepository for InMemoryRepository {
    async fn find_user(&self, id: i64) -> Option<User> {
        self.store.read().await.find_user_by_id(id).cloned()
    }

    async fn find_users_by_first_name(&self, name: &str) -> Vec<User> {
        self.store
            .read()
            .await
            .find_users_by_first_name(name)
            .into_iter()
            .cloned()
            .collect()
    }

    async fn users_sharing_domain(&self, domain: &str) -> AppResult<Vec<EmailEntry>> {
        self.store.read().await.users_sharing_domain(domain)
    }

    async fn can_create_user(&self, id: i64, email: &str, password: &str) -> bool {
        self.store.read().await.can_create_user(id, email, password)
    }

    async fn create_user(&self, user: User) -> AppResult<()> {
        self.store.write().await.create_user(user)
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.store.write().await.delete_user(id)
    }

    async fn find_product(&self, id: i64) -> Option<Product> {
        self.store.read().await.find_product_by_id(id).cloned()
    }

    async fn create_product(&self, product: Product) -> AppResult<()> {
        self.store.write().await.create_product(product)
    }

    async fn delete_product(&self, id: i64) -> AppResult<()> {
        self.store.write().await.delete_product(id)
    }

    async fn remove_product_from_all_carts(&self, product_id: i64) -> usize {
        self.store
            .write()
            .await
            .remove_product_from_all_carts(product_id)
    }

    async fn find_addresses(&self, user_id: i64) -> Option<Vec<Address>> {
        self.store
            .read()
            .await
            .find_addresses_for_user(user_id)
            .map(<[Address]>::to_vec)
    }

    async fn create_address(&self, user_id: i64, address: Address) -> AppResult<()> {
        self.store.write().await.create_address(user_id, address)
    }

    async fn find_cart(&self, user_id: i64) -> Option<Cart> {
        self.store.read().await.find_cart(user_id).cloned()
    }

    async fn add_to_cart(&self, user_id: i64, product_id: i64) -> AppResult<()> {
        self.store.write().await.add_to_cart(user_id, product_id)
    }

    async fn cart_summary(&self, user_id: i64) -> Option<CartSummary> {
        self.store.read().await.cart_summary(user_id)
    }

    async fn delete_cart(&self, user_id: i64) -> AppResult<()> {
        self.store.write().await.delete_cart(user_id)
    }
}
