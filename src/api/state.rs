//! Application state - Dependency injection container.
//!
//! Holds the services of one repository instance; cloning the state shares it.

use std::sync::Arc;

use crate::services::{CartService, ProductService, ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User and address service
    pub user_service: Arc<dyn UserService>,
    /// Product catalog service
    pub product_service: Arc<dyn ProductService>,
    /// Shopping cart service
    pub cart_service: Arc<dyn CartService>,
}

impl AppState {
    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self {
            user_service: container.users(),
            product_service: container.products(),
            cart_service: container.carts(),
        }
    }

    /// Create application state over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::from_container(&Services::in_memory())
    }
}
