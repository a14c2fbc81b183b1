//! Report endpoints.

use dossier_core::entities::{Report, ReportSummary};
use dossier_core::ids;

use crate::http::{check_response, decode_json};
use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// List the current user's reports, newest first (server order).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] on 401, otherwise [`ApiError::Api`],
    /// [`ApiError::Http`] or [`ApiError::Parse`].
    pub async fn list_reports(&self) -> Result<Vec<ReportSummary>, ApiError> {
        let resp = self.get("/api/results/").send().await?;
        let reports: Vec<ReportSummary> = decode_json(check_response(resp).await?).await?;
        tracing::debug!(count = reports.len(), "listed reports");
        Ok(reports)
    }

    /// Fetch one report.
    ///
    /// A 404 means the report is still being generated and is returned as
    /// [`ApiError::NotReady`]. The detail endpoint may omit `id`; it is
    /// filled in from the request.
    ///
    /// # Errors
    ///
    /// [`ApiError::Invalid`] for an unusable id (no request is made),
    /// [`ApiError::NotReady`] on 404, [`ApiError::Unauthorized`] on 401,
    /// otherwise [`ApiError::Api`], [`ApiError::Http`] or [`ApiError::Parse`].
    pub async fn get_report(&self, report_id: &str) -> Result<Report, ApiError> {
        ids::require("report", report_id)?;
        let resp = self
            .get(&format!("/api/results/{}", segment(report_id)))
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotReady {
                id: report_id.to_string(),
            });
        }
        let mut report: Report = decode_json(check_response(resp).await?).await?;
        if report.id.is_empty() {
            report.id = report_id.to_string();
        }
        Ok(report)
    }

    /// Look up the report produced by a query through the keyed endpoint.
    ///
    /// Returns `Ok(None)` on 404.
    ///
    /// # Errors
    ///
    /// [`ApiError::Invalid`] for an unusable id, [`ApiError::Unauthorized`]
    /// on 401, otherwise [`ApiError::Api`], [`ApiError::Http`] or
    /// [`ApiError::Parse`].
    pub async fn report_for_query(
        &self,
        query_id: &str,
    ) -> Result<Option<ReportSummary>, ApiError> {
        ids::require("query", query_id)?;
        let resp = self
            .get(&format!("/api/results/by-query/{}", segment(query_id)))
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode_json(check_response(resp).await?).await.map(Some)
    }
}
