//! Shopping cart aggregate.
//!
//! A cart belongs to exactly one user and keeps its own copy of every product
//! added to it, duplicates included.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Product;

/// One user's cart with its running total and item count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    #[serde(rename = "id_usuario")]
    #[schema(example = 1)]
    pub user_id: i64,
    #[serde(rename = "produtos")]
    pub products: Vec<Product>,
    #[serde(rename = "preco_total")]
    #[schema(example = 5.0)]
    pub total_price: f64,
    #[serde(rename = "quantidade_de_produtos")]
    #[schema(example = 1)]
    pub item_count: usize,
}

impl Cart {
    /// Create a cart holding a single product
    pub fn new(user_id: i64, product: Product) -> Self {
        Self {
            user_id,
            total_price: product.price,
            products: vec![product],
            item_count: 1,
        }
    }

    /// Append a product, add its price to the total and refresh the count
    pub fn push(&mut self, product: Product) {
        self.total_price += product.price;
        self.products.push(product);
        self.item_count = self.products.len();
    }

    /// Remove every entry of `product_id`, returning how many were dropped.
    ///
    /// The stored total follows the remaining products. The stored item count
    /// is not touched here; it is only refreshed by the next `push`.
    pub fn remove_product(&mut self, product_id: i64) -> usize {
        let before = self.products.len();
        self.products.retain(|p| p.id != product_id);
        let removed = before - self.products.len();
        if removed > 0 {
            self.total_price = self.computed_total();
        }
        removed
    }

    /// Sum of the prices currently in the cart
    pub fn computed_total(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }

    /// Count as stored, total recomputed from the products
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            item_count: self.item_count,
            total_price: self.computed_total(),
        }
    }
}

/// Item count and total of a cart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartSummary {
    #[serde(rename = "quantidade_de_produtos")]
    #[schema(example = 2)]
    pub item_count: usize,
    #[serde(rename = "preco_total")]
    #[schema(example = 10.0)]
    pub total_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64) -> Product {
        Product::new(id, format!("p{id}"), "", price)
    }

    #[test]
    fn test_new_cart_holds_one_product() {
        let cart = Cart::new(1, product(10, 5.0));

        assert_eq!(cart.item_count, 1);
        assert_eq!(cart.total_price, 5.0);
        assert_eq!(cart.products.len(), 1);
    }

    #[test]
    fn test_push_same_product_twice() {
        let mut cart = Cart::new(1, product(10, 5.0));
        cart.push(product(10, 5.0));

        assert_eq!(cart.item_count, 2);
        assert_eq!(cart.total_price, 10.0);
        assert_eq!(cart.summary(), CartSummary { item_count: 2, total_price: 10.0 });
    }

    #[test]
    fn test_remove_product_drops_every_entry() {
        let mut cart = Cart::new(1, product(1, 10.0));
        cart.push(product(2, 5.0));
        cart.push(product(1, 10.0));

        assert_eq!(cart.remove_product(1), 2);
        assert_eq!(cart.products, vec![product(2, 5.0)]);
        assert_eq!(cart.total_price, 5.0);
        assert_eq!(cart.summary().total_price, 5.0);
    }

    #[test]
    fn test_remove_product_leaves_stored_count() {
        let mut cart = Cart::new(1, product(1, 10.0));
        cart.push(product(2, 5.0));
        cart.remove_product(1);

        // Stored count stays stale, the derivable count is the sequence length.
        assert_eq!(cart.item_count, 2);
        assert_eq!(cart.summary().item_count, 2);
        assert_eq!(cart.products.len(), 1);
    }

    #[test]
    fn test_remove_missing_product_is_noop() {
        let mut cart = Cart::new(1, product(1, 10.0));

        assert_eq!(cart.remove_product(99), 0);
        assert_eq!(cart, Cart::new(1, product(1, 10.0)));
    }

    #[test]
    fn test_push_after_removal_refreshes_count() {
        let mut cart = Cart::new(1, product(1, 10.0));
        cart.push(product(2, 5.0));
        cart.remove_product(1);
        cart.push(product(3, 1.0));

        assert_eq!(cart.item_count, 2);
        assert_eq!(cart.total_price, 6.0);
    }
}
