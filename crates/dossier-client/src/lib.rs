//! # dossier-client
//!
//! HTTP client and polling workflows for the Dossier research backend.
//!
//! Endpoints are grouped by resource:
//! - `POST /api/query/submit`, `GET /api/query/status/{id}` (queries)
//! - `GET /api/results/`, `GET /api/results/{id}`,
//!   `GET /api/results/by-query/{query_id}` (results)
//! - `POST /auth/login`, `POST /auth/logout` (session)
//!
//! On top of the raw endpoints sit the status poller and report waiter
//! ([`poll`]), the query → report locator ([`locate`]) and the
//! submit-and-follow workflow ([`workflow`]).

pub mod backoff;
pub mod error;
pub mod locate;
pub mod poll;
pub mod workflow;

mod http;
mod queries;
mod results;
mod session;

pub use error::{ApiError, ErrorContext};
pub use session::LoginOutcome;

use dossier_config::ServerConfig;
use dossier_core::Navigation;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Dossier backend.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for `server`, authenticating with `token` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(server: &ServerConfig, token: Option<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("dossier/", env!("CARGO_PKG_VERSION")))
            .timeout(server.request_timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: server.base().to_string(),
            token,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.token.is_some()
    }

    /// Replace the session token, e.g. after a successful login.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Absolute URL of the web page a [`Navigation`] points at.
    #[must_use]
    pub fn web_url(&self, navigation: &Navigation) -> String {
        format!("{}{}", self.base_url, navigation.web_path())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorized(self.http.get(self.url(path)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorized(self.http.post(self.url(path)))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header(
                reqwest::header::COOKIE,
                dossier_auth::cookie::cookie_header(token),
            ),
            None => request,
        }
    }
}

/// Percent-encode an id for use as a single path segment.
fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        let server = ServerConfig {
            base_url: base_url.to_string(),
            ..ServerConfig::default()
        };
        ApiClient::new(&server, None).unwrap()
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = client("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url("/api/results/"),
            "http://localhost:8000/api/results/"
        );
    }

    #[test]
    fn web_url_for_report() {
        let client = client("https://dossier.example.com");
        assert_eq!(
            client.web_url(&Navigation::Report("7".into())),
            "https://dossier.example.com/results/7"
        );
    }

    #[test]
    fn session_flag_tracks_token() {
        let mut client = client("http://localhost:8000");
        assert!(!client.has_session());
        client.set_token(Some("tok".into()));
        assert!(client.has_session());
    }

    #[test]
    fn ids_are_encoded_as_one_segment() {
        assert_eq!(segment("a b"), "a%20b");
        assert_eq!(segment("42"), "42");
    }
}
