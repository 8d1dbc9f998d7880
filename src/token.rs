//! Session Token Handling
//!
//! Decodes the JWT access token and persists the token pair in localStorage.
//! The payload is decoded without signature verification: the authoritative
//! check happens server-side on every request, and a 401 tears the session
//! down. The decode here is a client-trust convenience, not a security
//! control.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::models::{Claims, TokenPair};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-segment JWT")]
    Malformed,
    #[error("token payload is not valid base64: {0}")]
    Encoding(String),
    #[error("token payload is not a claims object: {0}")]
    Claims(String),
}

/// Decodes the claims segment of a `header.payload.signature` token.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(TokenError::Malformed),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

impl Claims {
    /// A credential is only usable while `exp * 1000 > now`.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.exp * 1000 <= now_ms
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load_access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn store_tokens(tokens: &TokenPair) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, &tokens.access);
        let _ = storage.set_item(REFRESH_TOKEN_KEY, &tokens.refresh);
    }
}

pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(claims_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims_json.as_bytes());
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn test_decode_claims_roundtrip() {
        let token = make_token(
            r#"{"user_id":42,"email":"agent@example.com","organization_id":3,"exp":1900000000}"#,
        );
        let claims = decode_claims(&token).expect("decode");
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email.as_deref(), Some("agent@example.com"));
        assert_eq!(claims.organization_id, Some(3));
        assert!(!claims.is_superuser);
        assert_eq!(claims.exp, 1_900_000_000);
    }

    #[test]
    fn test_decode_rejects_malformed_tokens() {
        assert_eq!(decode_claims("not-a-jwt"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
        assert!(matches!(
            decode_claims("head.!!!.sig"),
            Err(TokenError::Encoding(_))
        ));
        let token = make_token(r#"{"not":"claims"}"#);
        assert!(matches!(decode_claims(&token), Err(TokenError::Claims(_))));
    }

    #[test]
    fn test_expiry_boundary() {
        let token = make_token(r#"{"user_id":1,"exp":1000}"#);
        let claims = decode_claims(&token).expect("decode");
        assert!(!claims.is_expired(999_999));
        // exactly at the boundary counts as expired
        assert!(claims.is_expired(1_000_000));
        assert!(claims.is_expired(1_000_001));
    }
}
