//! DTOs for the registration endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request.
///
/// Field-level constraints (format, length) are checked here; the ordered
/// business rules (duplicate email, domain suffix, password confirmation and
/// length) live in the account service.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 250))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"), length(max = 250))]
    pub email: String,

    #[validate(length(max = 250))]
    pub password: String,

    #[validate(length(max = 250))]
    pub confirm_password: String,
}

/// Response for a successful registration.
///
/// The password fields are write-only and the account starts inactive, so
/// only the identifiers come back.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub email: String,
}
