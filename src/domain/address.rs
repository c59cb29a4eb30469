//! Address value object and the per-user address book.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Postal address. No uniqueness constraint applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    #[serde(rename = "rua")]
    #[schema(example = "Rua das Flores, 10")]
    pub street: String,
    #[serde(rename = "cep")]
    #[schema(example = "01000-000")]
    pub postal_code: String,
    #[serde(rename = "cidade")]
    #[schema(example = "São Paulo")]
    pub city: String,
    #[serde(rename = "estado")]
    #[schema(example = "SP")]
    pub state: String,
}

/// Ordered addresses of exactly one user.
///
/// Only created together with the user's first address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    pub user_id: i64,
    pub addresses: Vec<Address>,
}

impl AddressBook {
    pub fn new(user_id: i64, first: Address) -> Self {
        Self {
            user_id,
            addresses: vec![first],
        }
    }

    pub fn push(&mut self, address: Address) {
        self.addresses.push(address);
    }
}
