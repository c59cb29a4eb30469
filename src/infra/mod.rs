//! Infrastructure layer - Storage of the service's state
//!
//! - `store`: the exclusively-owned in-memory collections and their rules
//! - `repository`: async, lock-guarded access to the store for the services

pub mod repository;
pub mod store;

pub use repository::{InMemoryRepository, ShopRepository};
pub use store::Store;

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockShopRepository;
