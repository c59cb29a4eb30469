//! Product service - Catalog use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Product;
use crate::errors::{AppResult, OptionExt};
use crate::infra::ShopRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Get product by ID
    async fn get_product(&self, id: i64) -> AppResult<Product>;

    /// Add a product to the catalog
    async fn create_product(&self, product: Product) -> AppResult<()>;

    /// Remove a product from the catalog and from every cart
    async fn delete_product(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ProductService.
pub struct ProductManager {
    repo: Arc<dyn ShopRepository>,
}

impl ProductManager {
    pub fn new(repo: Arc<dyn ShopRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn get_product(&self, id: i64) -> AppResult<Product> {
        self.repo.find_product(id).await.ok_or_not_found("Product")
    }

    async fn create_product(&self, product: Product) -> AppResult<()> {
        let id = product.id;
        self.repo.create_product(product).await?;
        tracing::info!(product_id = id, "Product created");
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> AppResult<()> {
        self.repo.delete_product(id).await?;
        tracing::info!(product_id = id, "Product deleted and removed from carts");
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
    async fn test_get_product() {
        let mut repo = MockShopRepository::new();
        repo.expect_find_product()
            .with(eq(10))
            .returning(|id| Some(Product::new(id, "Caneca", "", 5.0)));

        let product = ProductManager::new(Arc::new(repo)).get_product(10).await.unwrap();
        assert_eq!(product.price, 5.0);
    }

    #[tokio::test]
    async fn test_create_duplicate_product() {
        let mut repo = MockShopRepository::new();
        repo.expect_create_product()
            .returning(|_| Err(AppError::already_exists("Product")));

        let result = ProductManager::new(Arc::new(repo))
            .create_product(Product::new(10, "Caneca", "", 5.0))
            .await;
        assert_eq!(result, Err(AppError::already_exists("Product")));
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let mut repo = MockShopRepository::new();
        repo.expect_delete_product()
            .with(eq(3))
            .returning(|_| Err(AppError::not_found("Product")));

        let result = ProductManager::new(Arc::new(repo)).delete_product(3).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
