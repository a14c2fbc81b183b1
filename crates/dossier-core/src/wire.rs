//! Request and response bodies exchanged with the backend API.
//!
//! Field names mirror the JSON contract of the FastAPI backend
//! (`/api/query/*`, `/api/results/*`, `/auth/*`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QueryStatus;

/// Body of `POST /api/query/submit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmitRequest {
    pub question: String,
}

/// Success body of `POST /api/query/submit`.
///
/// Despite the name, `report_id` is a job id when the backend processes
/// queries in the background.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmitResponse {
    #[serde(deserialize_with = "crate::ids::deserialize")]
    #[schemars(with = "String")]
    pub report_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /api/query/status/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: QueryStatus,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// FastAPI error body (`{"detail": "..."}`).
///
/// `detail` is a string for `HTTPException` and a list of objects for
/// request validation errors; only the string form is surfaced verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The human-readable detail message, if the server sent one.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .map(str::to_string),
            _ => None,
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Body returned by `/auth/login`, `/auth/register` and `/auth/logout`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RedirectResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_response_accepts_integer_id() {
        let resp: SubmitResponse =
            serde_json::from_str(r#"{"report_id": 5, "message": "Report generated successfully"}"#)
                .unwrap();
        assert_eq!(resp.report_id, "5");
    }

    #[test]
    fn status_response_without_error_message() {
        let resp: StatusResponse = serde_json::from_str(r#"{"status": "processing"}"#).unwrap();
        assert_eq!(resp.status, QueryStatus::Processing);
        assert!(resp.error_message.is_none());
    }

    #[test]
    fn error_body_string_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Not authenticated"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("Not authenticated"));
    }

    #[test]
    fn error_body_validation_detail_uses_first_msg() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail": [{"loc": ["body", "question"], "msg": "field required", "type": "missing"}]}"#,
        )
        .unwrap();
        assert_eq!(body.message().as_deref(), Some("field required"));
    }

    #[test]
    fn error_body_blank_detail_is_none() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "  "}"#).unwrap();
        assert!(body.message().is_none());
        assert!(ErrorBody::default().message().is_none());
    }
}
