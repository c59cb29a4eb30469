//! User service - Handles user and address use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Address, EmailEntry, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::ShopRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Users whose first name is exactly `name`; `NotFound` when nobody matches
    async fn search_by_first_name(&self, name: &str) -> AppResult<Vec<User>>;

    /// Emails sharing the given domain
    async fn emails_by_domain(&self, domain: &str) -> AppResult<Vec<EmailEntry>>;

    /// Create a user after email, password and id checks
    async fn create_user(&self, user: User) -> AppResult<()>;

    /// Delete a user, cascading to cart and addresses
    async fn delete_user(&self, id: i64) -> AppResult<()>;

    /// Addresses registered for a user
    async fn list_addresses(&self, user_id: i64) -> AppResult<Vec<Address>>;

    /// Register an address for an existing user
    async fn add_address(&self, user_id: i64, address: Address) -> AppResult<()>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    repo: Arc<dyn ShopRepository>,
}

impl UserManager {
    pub fn new(repo: Arc<dyn ShopRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_user(id).await.ok_or_not_found("User")
    }

    async fn search_by_first_name(&self, name: &str) -> AppResult<Vec<User>> {
        let users = self.repo.find_users_by_first_name(name).await;
        if users.is_empty() {
            tracing::debug!(name, "No user with this first name");
            return Err(AppError::not_found("User"));
        }
        Ok(users)
    }

    async fn emails_by_domain(&self, domain: &str) -> AppResult<Vec<EmailEntry>> {
        self.repo.users_sharing_domain(domain).await
    }

    async fn create_user(&self, user: User) -> AppResult<()> {
        let id = user.id;
        self.repo.create_user(user).await.inspect_err(|e| {
            tracing::debug!(user_id = id, code = e.code(), "User rejected");
        })?;
        tracing::info!(user_id = id, "User created");
        Ok(())
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repo.delete_user(id).await?;
        tracing::info!(user_id = id, "User deleted with cart and addresses");
        Ok(())
    }

    async fn list_addresses(&self, user_id: i64) -> AppResult<Vec<Address>> {
        self.repo
            .find_addresses(user_id)
            .await
            .ok_or_not_found("Address book")
    }

    async fn add_address(&self, user_id: i64, address: Address) -> AppResult<()> {
        self.repo.create_address(user_id, address).await?;
        tracing::info!(user_id, "Address added");
        Ok(())
    }
}
