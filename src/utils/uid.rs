//! Base64url customer id encoding for password-reset links.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;

use crate::error::AppError;

/// Encodes a customer id as unpadded URL-safe base64 of its decimal form.
pub fn encode_uid(id: i64) -> String {
    URL_SAFE_NO_PAD.encode(id.to_string())
}

/// Decodes a uid back to a customer id.
///
/// The decoded value must be a plain decimal integer; anything else
/// (non-base64 input, non-UTF-8 bytes, signs, letters) is rejected.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with the message "Invalid User uid" on
/// any malformed input.
pub fn decode_uid(uid: &str) -> Result<i64, AppError> {
    let invalid = || AppError::bad_request("Invalid User uid", json!({ "uid": uid }));

    let bytes = URL_SAFE_NO_PAD.decode(uid).map_err(|_| invalid())?;
    let decoded = String::from_utf8(bytes).map_err(|_| invalid())?;

    if decoded.is_empty() || !decoded.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    decoded.parse::<i64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for id in [1i64, 42, 9_999_999] {
            assert_eq!(decode_uid(&encode_uid(id)).unwrap(), id);
        }
    }

    #[test]
    fn test_encode_is_unpadded() {
        assert!(!encode_uid(1).contains('='));
    }

    #[test]
    fn test_decode_rejects_non_base64() {
        assert!(decode_uid("not valid b64!").is_err());
    }

    #[test]
    fn test_decode_rejects_non_numeric_payload() {
        let uid = URL_SAFE_NO_PAD.encode("abc");
        assert!(decode_uid(&uid).is_err());
    }

    #[test]
    fn test_decode_rejects_negative_payload() {
        let uid = URL_SAFE_NO_PAD.encode("-5");
        assert!(decode_uid(&uid).is_err());
    }

    #[test]
    fn test_decode_rejects_empty_payload() {
        let uid = URL_SAFE_NO_PAD.encode("");
        assert!(decode_uid(&uid).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = decode_uid("????").unwrap_err();
        assert!(err.to_string().contains("Invalid User uid"));
    }
}
