//! Generic detail-message response.

use serde::Serialize;

/// A human-readable outcome message for endpoints with no payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub detail: &'static str,
}

impl MessageResponse {
    pub fn new(detail: &'static str) -> Self {
        Self { detail }
    }
}
