//! Service Container - Centralized service access.
//!
//! Builds every service over one shared repository so that users, products,
//! addresses and carts live in the same store.

use std::sync::Arc;

use super::{CartManager, CartService, ProductManager, ProductService, UserManager, UserService};
use crate::infra::{InMemoryRepository, ShopRepository};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;

    /// Get cart service
    fn carts(&self) -> Arc<dyn CartService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
    product_service: Arc<dyn ProductService>,
    cart_service: Arc<dyn CartService>,
}

impl Services {
    /// Create a service container over the given repository
    pub fn new(repo: Arc<dyn ShopRepository>) -> Self {
        Self {
            user_service: Arc::new(UserManager::new(repo.clone())),
            product_service: Arc::new(ProductManager::new(repo.clone())),
            cart_service: Arc::new(CartManager::new(repo)),
        }
    }

    /// Create a service container over a fresh, empty in-memory repository
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn carts(&self) -> Arc<dyn CartService> {
        self.cart_service.clone()
    }
}
