use dossier_auth::expiry;
use dossier_auth::token_store::{self, TokenSource};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Warn when the session ends within a day.
const EXPIRY_WARNING_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct AuthStatusResponse {
    authenticated: bool,
    server: String,
    token_source: Option<String>,
    user_id: Option<String>,
    email: Option<String>,
    expires_at: Option<String>,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stored = token_store::load_with_source();
    let status = describe_session(
        ctx.client.base_url(),
        stored.as_ref().map(|(token, source)| (token.as_str(), *source)),
    );
    output(&status, flags.format)
}

fn describe_session(server: &str, stored: Option<(&str, TokenSource)>) -> AuthStatusResponse {
    let mut status = AuthStatusResponse {
        authenticated: false,
        server: server.to_string(),
        token_source: None,
        user_id: None,
        email: None,
        expires_at: None,
        note: None,
    };

    let Some((token, source)) = stored else {
        status.note = Some("no session stored; run `dossier auth login`".into());
        return status;
    };
    status.token_source = Some(source.as_str().to_string());

    match expiry::decode_claims(token) {
        Ok(claims) => {
            let expired = claims.expires_at <= chrono::Utc::now();
            status.note = if expired {
                Some("session expired; run `dossier auth login`".into())
            } else if claims.is_near_expiry(EXPIRY_WARNING_SECS) {
                Some("session expires within a day".into())
            } else {
                None
            };
            status.authenticated = !expired;
            status.expires_at = Some(claims.expires_at.to_rfc3339());
            status.user_id = claims.user_id;
            status.email = claims.email;
        }
        Err(error) => {
            // Opaque tokens are still sent; the server decides.
            status.authenticated = true;
            status.note = Some(format!("expiry unknown: {error}"));
        }
    }
    status
}
