use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QueryStatus;

/// A research question submitted by the user and processed asynchronously.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Query {
    #[serde(deserialize_with = "crate::ids::deserialize")]
    #[schemars(with = "String")]
    pub id: String,
    pub question: String,
    pub status: QueryStatus,
    #[serde(default)]
    pub error_message: Option<String>,
}
