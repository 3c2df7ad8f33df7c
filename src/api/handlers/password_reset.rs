//! Handlers for password reset endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::message::MessageResponse;
use crate::api::dto::password_reset::{
    CheckResetTokenRequest, ResetLinkResponse, ResetPasswordRequest, SendResetLinkRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Issues a password reset link payload for an active account.
///
/// # Endpoint
///
/// `POST /api/auth/password-reset/send`
///
/// # Errors
///
/// Returns 404 Not Found when no account matches the email — unlike the
/// registration and verification endpoints, which report validation errors
/// for unknown emails. Returns 400 Bad Request for inactive accounts.
pub async fn send_reset_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<SendResetLinkRequest>,
) -> Result<Json<ResetLinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .password_reset_service
        .request_reset(&payload.email)
        .await?;

    Ok(Json(ResetLinkResponse {
        full_name: link.full_name,
        uid: link.uid,
        token: link.token,
    }))
}

/// Validates a reset link without consuming it.
///
/// # Endpoint
///
/// `POST /api/auth/password-reset/check`
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed uid or failed token check,
/// 404 Not Found when the uid resolves to no account.
pub async fn check_reset_token_handler(
    State(state): State<AppState>,
    Json(payload): Json<CheckResetTokenRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    state
        .password_reset_service
        .check_token(&payload.uid, &payload.token)
        .await?;

    Ok(Json(MessageResponse::new("Token is valid")))
}

/// Performs the password reset.
///
/// # Endpoint
///
/// `POST /api/auth/password-reset/confirm`
///
/// # Errors
///
/// Returns 400 Bad Request when the uid is malformed, passwords differ, the
/// account is inactive, or the token fails verification; 404 Not Found when
/// the uid resolves to no account.
pub async fn reset_password_handler(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    state
        .password_reset_service
        .reset_password(
            &payload.uid,
            &payload.token,
            &payload.password,
            &payload.confirm_password,
        )
        .await?;

    Ok(Json(MessageResponse::new("Password has been reset")))
}
