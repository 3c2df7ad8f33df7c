//! Handler for the registration endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::register::{RegisterRequest, RegisterResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new customer account.
///
/// # Endpoint
///
/// `POST /api/auth/register`
///
/// # Request Body
///
/// ```json
/// {
///   "full_name": "Jane Doe",
///   "email": "jane@gmail.com",
///   "password": "hunter2hunter2",
///   "confirm_password": "hunter2hunter2"
/// }
/// ```
///
/// # Behavior
///
/// The account is created inactive with a hashed password; the confirmation
/// password is only compared, never stored. Activation goes through the
/// verification endpoints.
///
/// # Errors
///
/// Returns 400 Bad Request when field validation or one of the ordered
/// business rules fails (duplicate email, wrong email domain, password
/// mismatch, password too short).
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    payload.validate()?;

    let customer = state
        .account_service
        .register(
            &payload.full_name,
            &payload.email,
            &payload.password,
            &payload.confirm_password,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: customer.id,
            email: customer.email,
        }),
    ))
}
