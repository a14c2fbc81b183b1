//! Client error types.

use std::time::Duration;

use dossier_core::Navigation;
use dossier_core::errors::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the Dossier backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 401: the session is missing or expired.
    #[error("not authenticated: run `dossier auth login`")]
    Unauthorized,

    /// HTTP transport error (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// `detail` field of the FastAPI error body, if any.
        detail: Option<String>,
    },

    /// The report exists in name only: the backend answered 404.
    #[error("report {id} is not ready yet")]
    NotReady { id: String },

    /// The server returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// The backend marked the query as failed.
    #[error("query {query_id} failed: {message}")]
    QueryFailed { query_id: String, message: String },

    /// The query completed but no report references it.
    #[error("query {query_id} completed but no report was found for it")]
    ReportMissing { query_id: String },

    /// A polling loop hit its deadline.
    #[error("gave up waiting for {waiting_for} after {}s", elapsed.as_secs())]
    TimedOut {
        waiting_for: String,
        elapsed: Duration,
    },

    /// Input was rejected before any request was sent.
    #[error(transparent)]
    Invalid(#[from] CoreError),
}

/// Which user action an error surfaced from; selects the fallback wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContext {
    Submit,
    Status,
    Report,
    History,
    Login,
    Register,
    Logout,
}

impl ErrorContext {
    const fn api_fallback(self) -> &'static str {
        match self {
            Self::Submit => "Failed to submit query",
            Self::Status => "Failed to fetch query status",
            Self::Report => "Failed to load report",
            Self::History => "Failed to load reports",
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
            Self::Logout => "Logout failed",
        }
    }

    const fn transport_fallback(self) -> &'static str {
        match self {
            Self::Submit => "An error occurred. Please try again.",
            Self::Status => "An error occurred while checking the query status",
            Self::Report => "An error occurred while loading the report",
            Self::History => "An error occurred while loading reports",
            Self::Login => "An error occurred while logging in",
            Self::Register => "An error occurred while registering",
            Self::Logout => "An error occurred while logging out",
        }
    }
}

impl ApiError {
    /// Where the user must go because of this error, if anywhere.
    ///
    /// A 401 from any endpoint means "log in again".
    #[must_use]
    pub const fn navigation(&self) -> Option<Navigation> {
        match self {
            Self::Unauthorized => Some(Navigation::Login),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Message to show the user: the server's `detail` verbatim when present,
    /// otherwise the fallback wording for `context`.
    #[must_use]
    pub fn user_message(&self, context: ErrorContext) -> String {
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Api { detail: None, .. } | Self::Parse(_) => context.api_fallback().to_string(),
            Self::Http(_) => context.transport_fallback().to_string(),
            Self::TimedOut { .. } if context == ErrorContext::Report => {
                "Report generation is taking longer than expected. Please check back later."
                    .to_string()
            }
            Self::TimedOut { .. } => {
                "Query processing is taking longer than expected. Please check back later."
                    .to_string()
            }
            Self::QueryFailed { message, .. } => message.clone(),
            Self::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            Self::Invalid(CoreError::Validation(reason)) => reason.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_shown_verbatim() {
        let err = ApiError::Api {
            status: 400,
            detail: Some("Question too long".into()),
        };
        assert_eq!(err.user_message(ErrorContext::Submit), "Question too long");
    }

    #[test]
    fn missing_detail_uses_context_fallback() {
        let err = ApiError::Api {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message(ErrorContext::Submit), "Failed to submit query");
        assert_eq!(err.user_message(ErrorContext::History), "Failed to load reports");
    }

    #[test]
    fn only_unauthorized_navigates_to_login() {
        assert_eq!(ApiError::Unauthorized.navigation(), Some(Navigation::Login));
        let err = ApiError::Api {
            status: 403,
            detail: None,
        };
        assert_eq!(err.navigation(), None);
    }

    #[test]
    fn query_failure_message_is_surfaced() {
        let err = ApiError::QueryFailed {
            query_id: "q1".into(),
            message: "bad input".into(),
        };
        assert_eq!(err.user_message(ErrorContext::Submit), "bad input");
        assert!(err.to_string().contains("bad input"));
    }

    #[test]
    fn report_timeout_wording() {
        let err = ApiError::TimedOut {
            waiting_for: "report r1".into(),
            elapsed: Duration::from_secs(600),
        };
        assert!(err.user_message(ErrorContext::Report).contains("taking longer than expected"));
        assert_eq!(err.to_string(), "gave up waiting for report r1 after 600s");
    }

    #[test]
    fn validation_reason_is_shown() {
        let err = ApiError::from(CoreError::Validation("question must not be empty".into()));
        assert_eq!(
            err.user_message(ErrorContext::Submit),
            "question must not be empty"
        );
    }
}
