//! Domain layer - Core business entities and logic
//!
//! Users, their addresses, catalog products and shopping carts, with the
//! validation rules that apply to them. No infrastructure concerns here.

pub mod address;
pub mod cart;
pub mod product;
pub mod user;

pub use address::{Address, AddressBook};
pub use cart::{Cart, CartSummary};
pub use product::Product;
pub use user::{
    email_domain, validate_email, validate_password, CreateUser, EmailEntry, User, UserResponse,
};
