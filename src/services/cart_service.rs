//! Cart service - Shopping cart use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Cart, CartSummary};
use crate::errors::{AppResult, OptionExt};
use crate::infra::ShopRepository;

/// Cart service trait for dependency injection.
#[async_trait]
pub trait CartService: Send + Sync {
    /// Add one unit of a product to the user's cart
    async fn add_to_cart(&self, user_id: i64, product_id: i64) -> AppResult<()>;

    /// Full cart of a user
    async fn get_cart(&self, user_id: i64) -> AppResult<Cart>;

    /// Item count and total of a user's cart
    async fn get_summary(&self, user_id: i64) -> AppResult<CartSummary>;

    /// Empty out a user's cart by deleting it
    async fn delete_cart(&self, user_id: i64) -> AppResult<()>;
}

/// Concrete implementation of CartService.
pub struct CartManager {
    repo: Arc<dyn ShopRepository>,
}

impl CartManager {
    pub fn new(repo: Arc<dyn ShopRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CartService for CartManager {
    async fn add_to_cart(&self, user_id: i64, product_id: i64) -> AppResult<()> {
        self.repo.add_to_cart(user_id, product_id).await?;
        tracing::info!(user_id, product_id, "Product added to cart");
        Ok(())
    }

    async fn get_cart(&self, user_id: i64) -> AppResult<Cart> {
        self.repo.find_cart(user_id).await.ok_or_not_found("Cart")
    }

    async fn get_summary(&self, user_id: i64) -> AppResult<CartSummary> {
        self.repo.cart_summary(user_id).await.ok_or_not_found("Cart")
    }

    async fn delete_cart(&self, user_id: i64) -> AppResult<()> {
        self.repo.delete_cart(user_id).await?;
        tracing::info!(user_id, "Cart deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockShopRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_add_to_cart_forwards_ids() {
        let mut repo = MockShopRepository::new();
        repo.expect_add_to_cart()
            .with(eq(1), eq(10))
            .times(1)
            .returning(|_, _| Ok(()));

        assert!(CartManager::new(Arc::new(repo)).add_to_cart(1, 10).await.is_ok());
    }

    #[tokio::test]
    async fn test_summary_without_cart() {
        let mut repo = MockShopRepository::new();
        repo.expect_cart_summary().returning(|_| None);

        let result = CartManager::new(Arc::new(repo)).get_summary(1).await;
        assert_eq!(result, Err(AppError::not_found("Cart")));
    }

    #[tokio::test]
    async fn test_summary_with_cart() {
        let mut repo = MockShopRepository::new();
        repo.expect_cart_summary()
            .with(eq(1))
            .returning(|_| Some(CartSummary { item_count: 2, total_price: 10.0 }));

        let summary = CartManager::new(Arc::new(repo)).get_summary(1).await.unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_price, 10.0);
    }

    #[tokio::test]
    async fn test_delete_missing_cart() {
        let mut repo = MockShopRepository::new();
        repo.expect_delete_cart()
            .returning(|_| Err(AppError::not_found("Cart")));

        let result = CartManager::new(Arc::new(repo)).delete_cart(1).await;
        assert!(result.is_err());
    }
}
