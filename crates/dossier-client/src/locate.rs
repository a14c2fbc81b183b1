//! Mapping a completed query to the report it produced.

use std::collections::HashMap;

use dossier_core::entities::ReportSummary;
use dossier_core::enums::LookupStrategy;

use crate::{ApiClient, ApiError};

/// Reports keyed by the query that produced them.
#[derive(Debug, Clone, Default)]
pub struct ReportIndex {
    by_query: HashMap<String, ReportSummary>,
}

impl ReportIndex {
    /// Index a listing. The listing is newest first, so when several reports
    /// share a query id the newest one wins.
    #[must_use]
    pub fn new(reports: Vec<ReportSummary>) -> Self {
        reports.into_iter().collect()
    }

    #[must_use]
    pub fn get(&self, query_id: &str) -> Option<&ReportSummary> {
        self.by_query.get(query_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_query.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_query.is_empty()
    }
}

impl FromIterator<ReportSummary> for ReportIndex {
    fn from_iter<I: IntoIterator<Item = ReportSummary>>(iter: I) -> Self {
        let mut by_query = HashMap::new();
        for report in iter {
            by_query.entry(report.query_id.clone()).or_insert(report);
        }
        Self { by_query }
    }
}

/// Strategy for finding the report of a completed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// Fetch `/api/results/` once and look the query up in a [`ReportIndex`].
    Listing,
    /// Ask `/api/results/by-query/{id}` directly.
    Direct,
}

impl From<LookupStrategy> for Locator {
    fn from(strategy: LookupStrategy) -> Self {
        match strategy {
            LookupStrategy::Listing => Self::Listing,
            LookupStrategy::Direct => Self::Direct,
        }
    }
}

impl Locator {
    /// Find the report produced by `query_id`, or `None` if there is none yet.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the lookup request.
    pub async fn locate(
        self,
        client: &ApiClient,
        query_id: &str,
    ) -> Result<Option<ReportSummary>, ApiError> {
        let found = match self {
            Self::Listing => ReportIndex::new(client.list_reports().await?)
                .get(query_id)
                .cloned(),
            Self::Direct => client.report_for_query(query_id).await?,
        };
        tracing::debug!(query_id, strategy = ?self, found = found.is_some(), "report lookup");
        Ok(found)
    }
}
