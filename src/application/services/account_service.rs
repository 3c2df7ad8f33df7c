//! Customer registration and email verification service.

use rand::Rng;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::password::hash_password;

/// Service for account registration and email verification.
///
/// Accounts are created inactive; a verification code is held in the cache
/// keyed by customer id and the account flips to active when the submitted
/// code matches. Delivery of the code (email) is owned by an external mailer.
pub struct AccountService<R: CustomerRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    allowed_email_domain: String,
    code_ttl_seconds: u64,
}

impl<R: CustomerRepository> AccountService<R> {
    /// Creates a new account service.
    ///
    /// # Arguments
    ///
    /// - `repository` - customer repository for DB operations
    /// - `cache` - transient store for pending verification codes
    /// - `allowed_email_domain` - required email suffix, e.g. `"@gmail.com"`
    /// - `code_ttl_seconds` - verification code lifetime in the cache
    pub fn new(
        repository: Arc<R>,
        cache: Arc<dyn CacheService>,
        allowed_email_domain: String,
        code_ttl_seconds: u64,
    ) -> Self {
        Self {
            repository,
            cache,
            allowed_email_domain,
            code_ttl_seconds,
        }
    }

    /// Registers a new inactive account.
    ///
    /// Business rules run in order; the first failing rule wins and later
    /// rules are not evaluated:
    ///
    /// 1. the email must not be registered already
    /// 2. the email must end with the allowed domain suffix
    /// 3. `password` must equal `confirm_password`
    /// 4. the password must be at least 8 characters
    ///
    /// The confirmation password is only compared, never stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when a rule fails, with the rule's
    /// message attached.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Customer, AppError> {
        if self.repository.email_exists(email).await? {
            return Err(AppError::bad_request(
                "This email already exist",
                json!({ "email": email }),
            ));
        } else if !email.ends_with(&self.allowed_email_domain) {
            return Err(AppError::bad_request(
                "please enter valid email",
                json!({ "email": email }),
            ));
        } else if password != confirm_password {
            return Err(AppError::bad_request(
                "Passwords do not match.",
                json!({ "field": "confirm_password" }),
            ));
        } else if password.chars().count() < 8 {
            return Err(AppError::bad_request(
                "Password must be 8",
                json!({ "field": "password" }),
            ));
        }

        let password_hash = hash_password(password)?;

        let customer = self
            .repository
            .create(NewCustomer {
                email: email.to_string(),
                full_name: full_name.to_string(),
                password_hash,
            })
            .await?;

        metrics::counter!("accounts_registered_total").increment(1);

        Ok(customer)
    }

    /// Issues a verification code for an inactive account.
    ///
    /// The code is cached keyed by customer id with the configured TTL; an
    /// unconsumed code simply expires. The external mailer picks the code up
    /// from there.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no account matches the email or
    /// the account is already active.
    pub async fn send_verification_code(&self, email: &str) -> Result<(), AppError> {
        let customer = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::bad_request(
                    "No account registered with this email",
                    json!({ "email": email }),
                )
            })?;

        if customer.is_active {
            return Err(AppError::bad_request(
                "User is already active.",
                json!({ "email": email }),
            ));
        }

        let code = generate_verification_code();

        if let Err(e) = self
            .cache
            .set_code(customer.id, &code.to_string(), Some(self.code_ttl_seconds))
            .await
        {
            warn!("Failed to cache verification code: {}", e);
        }

        debug!("Issued verification code for customer {}", customer.id);
        metrics::counter!("verification_codes_issued_total").increment(1);

        Ok(())
    }

    /// Verifies a submitted code and activates the account.
    ///
    /// Fails when the account is already active or the code does not match
    /// the cached value; on that failure path the cached entry is deleted.
    /// On success the entry is left to expire on its own — this asymmetry is
    /// deliberate and mirrors the long-standing behavior of the flow.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with "Invalid code." on any failed
    /// check, or when no account matches the email.
    pub async fn verify_email(&self, email: &str, code: i32) -> Result<Customer, AppError> {
        let customer = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::bad_request(
                    "No account registered with this email",
                    json!({ "email": email }),
                )
            })?;

        let cached = self
            .cache
            .get_code(customer.id)
            .await
            .unwrap_or_default();

        let code_matches = cached.as_deref() == Some(code.to_string().as_str());

        if customer.is_active || !code_matches {
            if let Err(e) = self.cache.remove_code(customer.id).await {
                warn!("Failed to drop verification code: {}", e);
            }
            return Err(AppError::bad_request("Invalid code.", json!({})));
        }

        self.repository.set_active(customer.id).await?;
        metrics::counter!("accounts_activated_total").increment(1);

        Ok(Customer {
            is_active: true,
            ..customer
        })
    }
}

/// Generates a random 6-digit verification code.
fn generate_verification_code() -> i32 {
    rand::rng().random_range(100_000..1_000_000)
}
