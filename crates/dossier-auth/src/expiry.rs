//! Best-effort JWT claim decoding.
//!
//! The backend issues HS256 JWTs whose signature the client cannot verify;
//! only the payload is read, for status display and stale-token checks.

use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// Unverified claims of a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Whether the token expires within `buffer_secs` from now.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        self.expires_at <= Utc::now() + chrono::Duration::seconds(buffer_secs)
    }
}

/// Decode the JWT payload without verifying the signature.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the JWT format is invalid or the `exp`
/// claim is missing or cannot be parsed.
pub fn decode_claims(jwt: &str) -> Result<SessionClaims, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::InvalidToken("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::InvalidToken(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::InvalidToken("missing exp claim".into()))?;
    let expires_at = DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))?;

    let user_id = match &value["user_id"] {
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::String(s) => Some(s.clone()),
        _ => None,
    };
    let email = value["email"].as_str().map(str::to_string);

    Ok(SessionClaims {
        user_id,
        email,
        expires_at,
    })
}

/// Decode only the `exp` claim.
///
/// # Errors
///
/// See [`decode_claims`].
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    decode_claims(jwt).map(|claims| claims.expires_at)
}
