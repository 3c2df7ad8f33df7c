//! Password reset flow: token issue, token check, and reset.

use serde_json::json;
use std::sync::Arc;

use crate::application::services::ResetTokenGenerator;
use crate::domain::entities::Customer;
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;
use crate::utils::uid::{decode_uid, encode_uid};

/// Payload for a password reset link.
///
/// `uid` is the base64url-encoded customer id; together with `token` it forms
/// the reset link an external mailer sends out.
#[derive(Debug, Clone)]
pub struct ResetLink {
    pub full_name: String,
    pub uid: String,
    pub token: String,
}

/// Service orchestrating the password reset flow.
///
/// Unlike registration and verification, lookups here use not-found
/// semantics: an unknown email or uid is a 404, not a validation error.
pub struct PasswordResetService<R: CustomerRepository> {
    repository: Arc<R>,
    tokens: ResetTokenGenerator,
}

impl<R: CustomerRepository> PasswordResetService<R> {
    /// Creates a new password reset service.
    pub fn new(repository: Arc<R>, tokens: ResetTokenGenerator) -> Self {
        Self { repository, tokens }
    }

    /// Issues a reset link payload for an active account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no account matches the email.
    /// Returns [`AppError::Validation`] for inactive accounts.
    pub async fn request_reset(&self, email: &str) -> Result<ResetLink, AppError> {
        let customer = self.find_by_email(email).await?;

        if !customer.is_active {
            return Err(AppError::bad_request(
                "User is not active.",
                json!({ "email": email }),
            ));
        }

        let token = self.tokens.make_token(&customer);
        metrics::counter!("password_reset_links_issued_total").increment(1);

        Ok(ResetLink {
            full_name: customer.full_name,
            uid: encode_uid(customer.id),
            token,
        })
    }

    /// Validates a reset link without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with "Invalid User uid" for a
    /// malformed uid and "Invalid token." for a failed token check.
    /// Returns [`AppError::NotFound`] when the uid resolves to no account.
    pub async fn check_token(&self, uid: &str, token: &str) -> Result<(), AppError> {
        let id = decode_uid(uid)?;
        let customer = self.find_by_id(id).await?;

        if !self.tokens.check_token(&customer, token) {
            return Err(AppError::bad_request("Invalid token.", json!({})));
        }

        Ok(())
    }

    /// Performs the password reset.
    ///
    /// Preconditions, checked in order after the uid resolves: passwords
    /// match, account active, token valid. Any single violated precondition
    /// blocks the reset. The confirmation password is only compared, never
    /// stored. Storing the new hash invalidates the used token along with any
    /// other outstanding ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the uid resolves to no account,
    /// [`AppError::Validation`] for every other failed precondition.
    pub async fn reset_password(
        &self,
        uid: &str,
        token: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AppError> {
        let id = decode_uid(uid)?;
        let customer = self.find_by_id(id).await?;

        if password != confirm_password {
            return Err(AppError::bad_request(
                "Passwords do not match.",
                json!({ "field": "confirm_password" }),
            ));
        }
        if !customer.is_active {
            return Err(AppError::bad_request(
                "User is not active.",
                json!({ "uid": uid }),
            ));
        }
        if !self.tokens.check_token(&customer, token) {
            return Err(AppError::bad_request("Invalid token.", json!({})));
        }

        let password_hash = hash_password(password)?;
        self.repository.set_password(customer.id, &password_hash).await?;

        metrics::counter!("passwords_reset_total").increment(1);

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Customer, AppError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Customer not found", json!({ "email": email }))
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Customer, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Customer not found", json!({ "id": id })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCustomerRepository;
    use crate::utils::password::verify_password;
    use chrono::Utc;

    fn test_customer(id: i64, is_active: bool) -> Customer {
        let now = Utc::now();
        Customer::new(
            id,
            "user@gmail.com".to_string(),
            "Test User".to_string(),
            "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            is_active,
            now,
            now,
        )
    }

    fn generator() -> ResetTokenGenerator {
        ResetTokenGenerator::new("test-signing-secret".to_string(), 3600)
    }

    fn service(repo: MockCustomerRepository) -> PasswordResetService<MockCustomerRepository> {
        PasswordResetService::new(Arc::new(repo), generator())
    }

    fn assert_validation_message(err: AppError, expected: &str) {
        match err {
            AppError::Validation { message, .. } => assert_eq!(message, expected),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_reset_returns_link_payload() {
        let mut repo = MockCustomerRepository::new();

        repo.expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(test_customer(7, true))));

        let service = service(repo);

        let link = service.request_reset("user@gmail.com").await.unwrap();

        assert_eq!(link.full_name, "Test User");
        assert_eq!(crate::utils::uid::decode_uid(&link.uid).unwrap(), 7);
        assert!(generator().check_token(&test_customer(7, true), &link.token));
    }

    #[tokio::test]
    async fn test_request_reset_unknown_email_is_not_found() {
        let mut repo = MockCustomerRepository::new();

        repo.expect_find_by_email().times(1).returning(|_| Ok(None));

        let service = service(repo);

        let err = service.request_reset("nobody@gmail.com").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_request_reset_inactive_account_rejected() {
        let mut repo = MockCustomerRepository::new();

        repo.expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(test_customer(7, false))));

        let service = service(repo);

        let err = service.request_reset("user@gmail.com").await.unwrap_err();

        assert_validation_message(err, "User is not active.");
    }

    #[tokio::test]
    async fn test_check_token_accepts_fresh_token() {
        let mut repo = MockCustomerRepository::new();

        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_customer(7, true))));

        let service = service(repo);

        let uid = encode_uid(7);
        let token = generator().make_token(&test_customer(7, true));

        assert!(service.check_token(&uid, &token).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_token_malformed_uid_rejected() {
        let repo = MockCustomerRepository::new();
        let service = service(repo);

        let err = service.check_token("!!!!", "whatever").await.unwrap_err();

        assert_validation_message(err, "Invalid User uid");
    }

    #[tokio::test]
    async fn test_check_token_unknown_uid_is_not_found() {
        let mut repo = MockCustomerRepository::new();

        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = service(repo);

        let err = service
            .check_token(&encode_uid(999), "whatever")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_check_token_bad_token_rejected() {
        let mut repo = MockCustomerRepository::new();

        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_customer(7, true))));

        let service = service(repo);

        let err = service
            .check_token(&encode_uid(7), "1abcd-ffffffff")
            .await
            .unwrap_err();

        assert_validation_message(err, "Invalid token.");
    }

    #[tokio::test]
    async fn test_reset_password_stores_new_hash() {
        let mut repo = MockCustomerRepository::new();

        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_customer(7, true))));
        repo.expect_set_password()
            .withf(|id, hash| *id == 7 && verify_password("new-password-1", hash))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(repo);

        let token = generator().make_token(&test_customer(7, true));

        service
            .reset_password(&encode_uid(7), &token, "new-password-1", "new-password-1")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_reset_password_mismatch_blocks() {
        let mut repo = MockCustomerRepository::new();

        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_customer(7, true))));
        repo.expect_set_password().times(0);

        let service = service(repo);

        let token = generator().make_token(&test_customer(7, true));

        let err = service
            .reset_password(&encode_uid(7), &token, "new-password-1", "other")
            .await
            .unwrap_err();

        assert_validation_message(err, "Passwords do not match.");
    }

    #[tokio::test]
    async fn test_reset_password_inactive_account_blocks() {
        let mut repo = MockCustomerRepository::new();

        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_customer(7, false))));
        repo.expect_set_password().times(0);

        let service = service(repo);

        // Token minted while the account was active.
        let token = generator().make_token(&test_customer(7, true));

        let err = service
            .reset_password(&encode_uid(7), &token, "new-password-1", "new-password-1")
            .await
            .unwrap_err();

        assert_validation_message(err, "User is not active.");
    }

    #[tokio::test]
    async fn test_reset_password_stale_token_blocks() {
        let mut repo = MockCustomerRepository::new();

        // The stored hash differs from the one the token was minted against,
        // as it would after a completed reset.
        repo.expect_find_by_id().times(1).returning(|_| {
            let mut customer = test_customer(7, true);
            customer.password_hash = "$argon2id$v=19$m=19456,t=2,p=1$xyz$123".to_string();
            Ok(Some(customer))
        });
        repo.expect_set_password().times(0);

        let service = service(repo);

        let token = generator().make_token(&test_customer(7, true));

        let err = service
            .reset_password(&encode_uid(7), &token, "new-password-1", "new-password-1")
            .await
            .unwrap_err();

        assert_validation_message(err, "Invalid token.");
    }

    #[tokio::test]
    async fn test_reset_password_unknown_uid_is_not_found() {
        let mut repo = MockCustomerRepository::new();

        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = service(repo);

        let err = service
            .reset_password(&encode_uid(999), "token", "password-1", "password-1")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
