//! Application services orchestrating domain operations.

mod account_service;
mod catalog_service;
mod order_service;
mod password_reset_service;
mod reset_token;

pub use account_service::AccountService;
pub use catalog_service::{CatalogService, CategoryWithProducts};
pub use order_service::{OrderService, OrderSummary};
pub use password_reset_service::{PasswordResetService, ResetLink};
pub use reset_token::ResetTokenGenerator;
