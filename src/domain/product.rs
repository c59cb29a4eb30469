//! Product domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog product with a caller-assigned id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(example = 10)]
    pub id: i64,
    #[serde(rename = "nome")]
    #[schema(example = "Caneca")]
    pub name: String,
    #[serde(rename = "descricao")]
    #[schema(example = "Caneca de cerâmica")]
    pub description: String,
    #[serde(rename = "preco")]
    #[schema(example = 5.0, minimum = 0.0)]
    pub price: f64,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    /// Prices must be finite and non-negative
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }
}
