//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{address_handler, cart_handler, product_handler, user_handler};
use crate::domain::{Address, Cart, CartSummary, CreateUser, EmailEntry, Product, UserResponse};

/// OpenAPI documentation for the store API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Loja API",
        version = "0.1.0",
        description = "In-memory users, addresses, products and shopping carts",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::create_user,
        user_handler::get_user,
        user_handler::delete_user,
        user_handler::search_users,
        user_handler::emails_by_domain,
        // Address endpoints
        address_handler::list_addresses,
        address_handler::add_address,
        // Product endpoints
        product_handler::create_product,
        product_handler::get_product,
        product_handler::delete_product,
        // Cart endpoints
        cart_handler::add_to_cart,
        cart_handler::get_cart,
        cart_handler::get_summary,
        cart_handler::delete_cart,
    ),
    components(
        schemas(
            CreateUser,
            UserResponse,
            EmailEntry,
            Address,
            Product,
            Cart,
            CartSummary,
        )
    ),
    tags(
        (name = "Users", description = "User registration and lookup"),
        (name = "Addresses", description = "Per-user address books"),
        (name = "Products", description = "Product catalog"),
        (name = "Carts", description = "Shopping carts")
    )
)]
pub struct ApiDoc;
