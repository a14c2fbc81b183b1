//! General application configuration.

use dossier_core::enums::SubmissionMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SubmissionConfig {
    /// Whether the submit endpoint returns a report id or a job id.
    #[serde(default)]
    pub mode: SubmissionMode,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default row limit for `history`. Unset shows every report.
    #[serde(default)]
    pub default_limit: Option<u32>,
}
