//! Query submission and status endpoints.

use dossier_core::ids;
use dossier_core::wire::{StatusResponse, SubmitRequest, SubmitResponse};

use crate::http::{check_response, decode_json};
use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// Submit a research question.
    ///
    /// The question is trimmed and rejected locally when blank; nothing is
    /// sent in that case.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for a blank question, [`ApiError::Unauthorized`]
    /// on 401, [`ApiError::Api`] with the server's `detail` on other failures.
    pub async fn submit_query(&self, question: &str) -> Result<SubmitResponse, ApiError> {
        let question = dossier_core::validate_question(question)?;
        tracing::debug!(chars = question.len(), "submitting query");

        let resp = self
            .post("/api/query/submit")
            .json(&SubmitRequest {
                question: question.to_string(),
            })
            .send()
            .await?;
        let body: SubmitResponse = decode_json(check_response(resp).await?).await?;

        if !ids::is_valid(&body.report_id) {
            return Err(ApiError::Parse(format!(
                "submit response carried an unusable id: {:?}",
                body.report_id
            )));
        }
        tracing::info!(id = %body.report_id, "query accepted");
        Ok(body)
    }

    /// Fetch the processing status of a submitted query.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for an unusable id, [`ApiError::Unauthorized`]
    /// on 401 and [`ApiError::Api`] or [`ApiError::Http`] on any other failure.
    pub async fn query_status(&self, query_id: &str) -> Result<StatusResponse, ApiError> {
        ids::require("query", query_id)?;
        let resp = self
            .get(&format!("/api/query/status/{}", segment(query_id)))
            .send()
            .await?;
        decode_json(check_response(resp).await?).await
    }
}
