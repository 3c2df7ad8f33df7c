//! DTOs for password reset endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to issue a reset link.
#[derive(Debug, Deserialize, Validate)]
pub struct SendResetLinkRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Reset link payload handed to the mailer.
#[derive(Debug, Serialize)]
pub struct ResetLinkResponse {
    pub full_name: String,
    pub uid: String,
    pub token: String,
}

/// Request to validate a reset link without consuming it.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckResetTokenRequest {
    #[validate(length(min = 1))]
    pub uid: String,

    #[validate(length(min = 1))]
    pub token: String,
}

/// Request to perform the reset.
#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1))]
    pub uid: String,

    #[validate(length(min = 1))]
    pub token: String,

    #[validate(length(max = 250))]
    pub password: String,

    #[validate(length(max = 250))]
    pub confirm_password: String,
}
