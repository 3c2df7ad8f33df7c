//! Repository trait for customer account data access.

use crate::domain::entities::{Customer, NewCustomer};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for customer accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Creates a new customer account.
    ///
    /// Accounts are always created with `is_active = false`; activation goes
    /// through the verification flow.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError>;

    /// Finds a customer by email address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, AppError>;

    /// Finds a customer by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Returns whether an account with the given email already exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;

    /// Marks the account active.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_active(&self, id: i64) -> Result<(), AppError>;

    /// Replaces the stored password hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_password(&self, id: i64, password_hash: &str) -> Result<(), AppError>;

    /// Lists all accounts, newest first. Used by the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Customer>, AppError>;
}
