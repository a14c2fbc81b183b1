//! Login, registration and logout.

use dossier_core::Navigation;
use dossier_core::wire::{LoginRequest, RedirectResponse, RegisterRequest};
use serde::Serialize;

use crate::http::{api_error, check_response, decode_json};
use crate::{ApiClient, ApiError};

/// Result of a successful `POST /auth/login` or `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    /// Session token taken from the `access_token` cookie.
    #[serde(skip)]
    pub token: String,
    pub message: Option<String>,
    pub navigation: Navigation,
}

impl ApiClient {
    /// Log in with email and password.
    ///
    /// A 401 here means bad credentials, not an expired session, so it is
    /// returned as [`ApiError::Api`] carrying the server's detail.
    ///
    /// # Errors
    ///
    /// [`ApiError::Api`] on rejected credentials, [`ApiError::Parse`] when the
    /// response sets no session cookie, [`ApiError::Http`] on transport failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let resp = self
            .post("/auth/login")
            .json(&LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let outcome = open_session(resp, "login").await?;
        tracing::info!("logged in");
        Ok(outcome)
    }

    /// Create an account; the server logs the new user in straight away.
    ///
    /// The password is sent as its own confirmation.
    ///
    /// # Errors
    ///
    /// [`ApiError::Api`] with the server's detail when the account is
    /// rejected (taken email or username), [`ApiError::Parse`] when the
    /// response sets no session cookie, [`ApiError::Http`] on transport failure.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, ApiError> {
        let resp = self
            .post("/auth/register")
            .json(&RegisterRequest {
                username: username.trim().to_string(),
                email: email.trim().to_string(),
                password: password.to_string(),
                confirm_password: password.to_string(),
            })
            .send()
            .await?;
        let outcome = open_session(resp, "register").await?;
        tracing::info!(username = username.trim(), "registered");
        Ok(outcome)
    }

    /// Log out on the server and return where to go next.
    ///
    /// Never fails: an unreachable server or an error response falls back
    /// to [`Navigation::Home`].
    pub async fn logout(&self) -> Navigation {
        let resp = match self.post("/auth/logout").send().await {
            Ok(resp) => resp,
            Err(error) => {
                tracing::warn!(%error, "logout request failed; returning home");
                return Navigation::Home;
            }
        };
        if !resp.status().is_success() {
            tracing::warn!(status = resp.status().as_u16(), "logout rejected; returning home");
            return Navigation::Home;
        }
        let body: RedirectResponse = decode_json(resp).await.unwrap_or_default();
        Navigation::from_redirect(body.redirect.as_deref())
    }
}

/// Take the session cookie and redirect from a login-style response.
///
/// A 401 is a credential rejection here, not an expired session.
async fn open_session(resp: reqwest::Response, action: &str) -> Result<LoginOutcome, ApiError> {
    if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
        return Err(api_error(resp).await);
    }
    let resp = check_response(resp).await?;

    let token = dossier_auth::cookie::session_from_set_cookie(
        resp.headers()
            .get_all(reqwest::header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok()),
    )
    .ok_or_else(|| ApiError::Parse(format!("{action} response did not set a session cookie")))?;

    let body: RedirectResponse = decode_json(resp).await.unwrap_or_default();
    Ok(LoginOutcome {
        token,
        message: body.message,
        navigation: Navigation::from_redirect(body.redirect.as_deref()),
    })
}
