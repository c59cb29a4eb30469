//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic over the repository. They depend on the
//! `ShopRepository` abstraction, so tests can swap in a mock.

mod cart_service;
pub mod container;
mod product_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use cart_service::{CartManager, CartService};
pub use product_service::{ProductManager, ProductService};
pub use user_service::{UserManager, UserService};
