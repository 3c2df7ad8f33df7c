//! Customer account entity.

use chrono::{DateTime, Utc};

/// A customer account.
///
/// Accounts are created inactive and activated through the email verification
/// flow. The password is stored only as an Argon2id hash.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new Customer instance.
    pub fn new(
        id: i64,
        email: String,
        full_name: String,
        password_hash: String,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            full_name,
            password_hash,
            is_active,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new customer account.
///
/// `password_hash` must already be hashed; raw passwords never reach the
/// repository layer.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
}
