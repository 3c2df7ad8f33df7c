//! Handlers for email verification endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::message::MessageResponse;
use crate::api::dto::verification::{SendVerificationRequest, VerifyEmailRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Issues a verification code for an inactive account.
///
/// The code lands in the cache keyed by customer id; delivery is owned by an
/// external mailer.
///
/// # Endpoint
///
/// `POST /api/auth/verification/send`
///
/// # Errors
///
/// Returns 400 Bad Request when no account matches the email or the account
/// is already active.
pub async fn send_verification_handler(
    State(state): State<AppState>,
    Json(payload): Json<SendVerificationRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    state
        .account_service
        .send_verification_code(&payload.email)
        .await?;

    Ok(Json(MessageResponse::new("Verification code sent")))
}

/// Confirms a verification code and activates the account.
///
/// # Endpoint
///
/// `POST /api/auth/verification/confirm`
///
/// # Errors
///
/// Returns 400 Bad Request with "Invalid code." when the account is already
/// active or the code does not match; the cached code is dropped on that
/// failure path.
pub async fn verify_email_handler(
    State(state): State<AppState>,
    Json(payload): Json<VerifyEmailRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    state
        .account_service
        .verify_email(&payload.email, payload.code)
        .await?;

    Ok(Json(MessageResponse::new("Account activated")))
}
