//! DTOs for product endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::Product;

/// A catalog product as exposed over the API.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub category_id: i64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            category_id: p.category_id,
        }
    }
}
