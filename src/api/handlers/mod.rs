//! HTTP request handlers.

pub mod address_handler;
pub mod cart_handler;
pub mod product_handler;
pub mod user_handler;

pub use address_handler::address_routes;
pub use cart_handler::cart_routes;
pub use product_handler::product_routes;
pub use user_handler::user_routes;
