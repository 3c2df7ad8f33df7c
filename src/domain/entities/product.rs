//! Product entity.

use rust_decimal::Decimal;

/// A catalog product belonging to a category.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub category_id: i64,
}

impl Product {
    /// Creates a new Product instance.
    pub fn new(id: i64, name: String, price: Decimal, category_id: i64) -> Self {
        Self {
            id,
            name,
            price,
            category_id,
        }
    }
}

/// Input data for creating a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub category_id: i64,
}
