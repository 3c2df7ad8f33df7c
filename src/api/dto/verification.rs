//! DTOs for email verification endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request to issue a verification code.
#[derive(Debug, Deserialize, Validate)]
pub struct SendVerificationRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Request to confirm a verification code.
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub code: i32,
}
