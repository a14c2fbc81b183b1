//! Entity structs for the Dossier domain objects.
//!
//! Shapes follow the JSON bodies of the backend API. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod query;
mod report;

pub use query::Query;
pub use report::{Report, ReportSummary};
