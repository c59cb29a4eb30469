//! Loja API - in-memory e-commerce records over HTTP
//!
//! Users, their addresses, catalog products and shopping carts, kept in a
//! single in-memory store and exposed through an axum router.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and validation rules
//! - **infra**: The in-memory store and its lock-guarded repository
//! - **services**: Application use cases
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 8000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Address, Cart, CartSummary, Product, User};
pub use errors::{AppError, AppResult};
pub use infra::{InMemoryRepository, ShopRepository, Store};
