use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::timestamps;

/// A finished report, as returned by `GET /api/results/{id}`.
///
/// The backend may omit `id` and `query_id` on this endpoint; callers that
/// know the id fill it in after fetching.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    #[serde(default, deserialize_with = "crate::ids::deserialize")]
    #[schemars(with = "String")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::ids::deserialize_opt")]
    #[schemars(with = "Option<String>")]
    pub query_id: Option<String>,
    pub title: String,
    pub question: String,
    #[serde(deserialize_with = "timestamps::deserialize")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
    /// Markdown body.
    pub report_text: String,
}

impl Report {
    /// Render as a standalone markdown document.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        format!(
            "# {title}\n\n**Query:** {question}\n\n**Generated:** {date}\n\n---\n\n{body}\n",
            title = self.title,
            question = self.question,
            date = timestamps::display_local(self.created_at),
            body = self.report_text.trim_end(),
        )
    }
}

/// One entry of the report history (`GET /api/results/`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportSummary {
    #[serde(deserialize_with = "crate::ids::deserialize")]
    #[schemars(with = "String")]
    pub id: String,
    #[serde(deserialize_with = "crate::ids::deserialize")]
    #[schemars(with = "String")]
    pub query_id: String,
    pub title: String,
    pub question: String,
    #[serde(deserialize_with = "timestamps::deserialize")]
    #[schemars(with = "DateTime<Utc>")]
    pub created_at: DateTime<Utc>,
}
