//! Shared HTTP response helpers for the API endpoints.
//!
//! Centralizes status-code checks (401 → [`ApiError::Unauthorized`], 429 rate
//! limiting with `Retry-After` parsing, non-success → [`ApiError::Api`] with
//! the FastAPI `detail`) so endpoint modules stay focused on request
//! construction and response mapping.

use dossier_core::wire::ErrorBody;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ApiError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !status.is_success() {
        return Err(api_error(resp).await);
    }
    Ok(resp)
}

/// Build an [`ApiError::Api`] from a failed response, extracting `detail`.
pub async fn api_error(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Api {
        status,
        detail: extract_detail(&body),
    }
}

/// Read and decode a JSON body.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let url = resp.url().path().to_string();
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(format!("{url}: {e}")))
}

fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message())
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_missing_header() {
        let resp = mock_response(429, "");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "not-a-number");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn unauthorized_is_its_own_variant() {
        let resp = mock_response(401, r#"{"detail": "Not authenticated"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn check_response_rate_limited_with_header() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_extracts_detail() {
        let resp = mock_response(400, r#"{"detail": "Question too long"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            ApiError::Api { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail.as_deref(), Some("Question too long"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_html_body_has_no_detail() {
        let resp = mock_response(502, "<html>Bad Gateway</html>");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Api {
                status: 502,
                detail: None
            }
        ));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn decode_json_reports_parse_errors() {
        let resp = mock_response(200, "not json");
        let err = decode_json::<serde_json::Value>(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
