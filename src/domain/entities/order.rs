//! Order entity.

use chrono::{DateTime, Utc};

/// A customer order referencing a set of products.
///
/// The order total is never stored: it is recomputed at read time from the
/// current prices of the associated products.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        id: i64,
        customer_id: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_id,
            created_at,
            updated_at,
        }
    }
}
