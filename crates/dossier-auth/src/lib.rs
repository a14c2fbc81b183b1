//! # dossier-auth
//!
//! Session handling for the Dossier CLI.
//!
//! The backend authenticates with an `access_token` cookie. This crate stores
//! that token (OS keychain via `keyring`, env var, or a 0600 file), extracts it
//! from `Set-Cookie` headers, and decodes its expiry for status display.

pub mod cookie;
pub mod error;
pub mod expiry;
pub mod token_store;

pub use error::AuthError;

/// Name of the session cookie set by `/auth/login`.
pub const SESSION_COOKIE: &str = "access_token";

/// Resolve the stored token and the tier it came from, dropping it if its
/// `exp` claim is in the past.
///
/// Tokens that are not JWTs pass through unchanged.
#[must_use]
pub fn resolve_live_session() -> Option<(String, token_store::TokenSource)> {
    let (token, source) = token_store::load_with_source()?;
    match expiry::decode_expiry(&token) {
        Ok(expires_at) if expires_at <= chrono::Utc::now() => {
            tracing::warn!(%expires_at, source = source.as_str(), "stored session token has expired; run `dossier auth login`");
            None
        }
        _ => Some((token, source)),
    }
}

/// Persist a session token received from the server.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store_token(token: &str) -> Result<(), AuthError> {
    token_store::store(token)
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
