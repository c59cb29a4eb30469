//! In-memory store backing the repository.
//!
//! Owns the user, product, address book and cart collections. Every lookup is a
//! linear scan in insertion order, so the first match wins and listings keep
//! the order entities were created in.

use crate::domain::{
    validate_email, validate_password, Address, AddressBook, Cart, CartSummary, EmailEntry,
    Product, User,
};
use crate::errors::{AppError, AppResult};

/// Exclusively-owned collections of the service.
///
/// Reads take `&self`, mutations take `&mut self`; callers that share a store
/// across tasks must serialize access per operation.
#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    products: Vec<Product>,
    address_books: Vec<AddressBook>,
    carts: Vec<Cart>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Users
    // =========================================================================

    pub fn find_user_by_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Users whose first name token equals `name` exactly (case-sensitive).
    pub fn find_users_by_first_name(&self, name: &str) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| u.first_name() == Some(name))
            .collect()
    }

    /// Emails of every user whose domain equals `domain`.
    ///
    /// # Errors
    /// `NotFound` when no email matches.
    pub fn users_sharing_domain(&self, domain: &str) -> AppResult<Vec<EmailEntry>> {
        let emails: Vec<EmailEntry> = self
            .users
            .iter()
            .filter(|u| u.email_domain() == Some(domain))
            .map(|u| EmailEntry::new(u.email.clone()))
            .collect();

        if emails.is_empty() {
            return Err(AppError::not_found("Email domain"));
        }
        Ok(emails)
    }

    /// Why a user could not be created, checked as email, password, then id.
    pub fn check_new_user(&self, id: i64, email: &str, password: &str) -> AppResult<()> {
        if !validate_email(email) {
            return Err(AppError::InvalidEmail);
        }
        if !validate_password(password) {
            return Err(AppError::InvalidPassword);
        }
        if self.find_user_by_id(id).is_some() {
            return Err(AppError::already_exists("User"));
        }
        Ok(())
    }

    pub fn can_create_user(&self, id: i64, email: &str, password: &str) -> bool {
        self.check_new_user(id, email, password).is_ok()
    }

    pub fn create_user(&mut self, user: User) -> AppResult<()> {
        self.check_new_user(user.id, &user.email, &user.password)?;
        self.users.push(user);
        Ok(())
    }

    /// Remove a user together with their cart and address book, when present.
    pub fn delete_user(&mut self, id: i64) -> AppResult<()> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AppError::not_found("User"))?;

        self.users.remove(index);
        if let Some(cart) = self.carts.iter().position(|c| c.user_id == id) {
            self.carts.remove(cart);
        }
        if let Some(book) = self.address_books.iter().position(|b| b.user_id == id) {
            self.address_books.remove(book);
        }
        Ok(())
    }

    // =========================================================================
    // Products
    // =========================================================================

    pub fn find_product_by_id(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn create_product(&mut self, product: Product) -> AppResult<()> {
        if self.find_product_by_id(product.id).is_some() {
            return Err(AppError::already_exists("Product"));
        }
        if !product.has_valid_price() {
            return Err(AppError::InvalidPrice);
        }
        self.products.push(product);
        Ok(())
    }

    /// Remove a product from the catalog and from every cart holding it.
    pub fn delete_product(&mut self, id: i64) -> AppResult<()> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Product"))?;

        self.products.remove(index);
        self.remove_product_from_all_carts(id);
        Ok(())
    }

    /// Drop every entry of `product_id` from every cart; returns entries removed.
    pub fn remove_product_from_all_carts(&mut self, product_id: i64) -> usize {
        self.carts
            .iter_mut()
            .map(|cart| cart.remove_product(product_id))
            .sum()
    }

    // =========================================================================
    // Addresses
    // =========================================================================

    /// Addresses of a user, `None` when no address book was ever created.
    pub fn find_addresses_for_user(&self, user_id: i64) -> Option<&[Address]> {
        self.address_books
            .iter()
            .find(|b| b.user_id == user_id)
            .map(|b| b.addresses.as_slice())
    }

    pub fn create_address(&mut self, user_id: i64, address: Address) -> AppResult<()> {
        if self.find_user_by_id(user_id).is_none() {
            return Err(AppError::not_found("User"));
        }

        match self.address_books.iter_mut().find(|b| b.user_id == user_id) {
            Some(book) => book.push(address),
            None => self.address_books.push(AddressBook::new(user_id, address)),
        }
        Ok(())
    }

    // =========================================================================
    // Carts
    // =========================================================================

    pub fn find_cart(&self, user_id: i64) -> Option<&Cart> {
        self.carts.iter().find(|c| c.user_id == user_id)
    }

    /// Add one unit of a product to the user's cart, creating the cart on first use.
    pub fn add_to_cart(&mut self, user_id: i64, product_id: i64) -> AppResult<()> {
        if self.find_user_by_id(user_id).is_none() {
            return Err(AppError::not_found("User"));
        }
        let product = self
            .find_product_by_id(product_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Product"))?;

        match self.carts.iter_mut().find(|c| c.user_id == user_id) {
            Some(cart) => cart.push(product),
            None => self.carts.push(Cart::new(user_id, product)),
        }
        Ok(())
    }

    pub fn cart_summary(&self, user_id: i64) -> Option<CartSummary> {
        self.find_cart(user_id).map(Cart::summary)
    }

    pub fn delete_cart(&mut self, user_id: i64) -> AppResult<()> {
        let index = self
            .carts
            .iter()
            .position(|c| c.user_id == user_id)
            .ok_or_else(|| AppError::not_found("Cart"))?;

        self.carts.remove(index);
        Ok(())
    }
}
