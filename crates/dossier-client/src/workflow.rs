//! Submit a question and follow it to its report.

use dossier_config::DossierConfig;
use dossier_core::Navigation;
use dossier_core::enums::{PollPhase, SubmissionMode};
use dossier_core::errors::CoreError;
use serde::Serialize;

use crate::locate::Locator;
use crate::poll::{PollObserver, PollOutcome, PollPolicy, StatusPoller};
use crate::{ApiClient, ApiError};

/// Result of a successful submit-and-follow run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Id returned by the submit endpoint (a report id in direct mode, a
    /// job id in poll mode).
    pub id: String,
    pub mode: SubmissionMode,
    pub phase: PollPhase,
    pub navigation: Navigation,
    /// Status polls made; `0` in direct mode.
    pub polls: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Drives one question from submission to a [`Navigation`].
pub struct Submitter<'a> {
    client: &'a ApiClient,
    mode: SubmissionMode,
    policy: PollPolicy,
    locator: Locator,
}

impl<'a> Submitter<'a> {
    #[must_use]
    pub fn from_config(client: &'a ApiClient, config: &DossierConfig) -> Self {
        Self {
            client,
            mode: config.submission.mode,
            policy: PollPolicy::status(&config.polling),
            locator: Locator::from(config.server.lookup),
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: SubmissionMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn with_locator(mut self, locator: Locator) -> Self {
        self.locator = locator;
        self
    }

    /// Submit `question` and, in poll mode, wait for its report.
    ///
    /// # Errors
    ///
    /// [`ApiError::Invalid`] for a blank question, [`ApiError::Unauthorized`]
    /// on any 401, [`ApiError::QueryFailed`] when the backend fails the
    /// query, [`ApiError::TimedOut`] at the deadline, [`ApiError::ReportMissing`]
    /// when no report references the completed query, and transport or API
    /// errors from any request.
    pub async fn run<O: PollObserver>(
        &self,
        question: &str,
        observer: &O,
    ) -> Result<Submission, ApiError> {
        let mut phase = Phase::default();
        let accepted = self.client.submit_query(question).await?;
        phase.advance(PollPhase::Submitted)?;

        if self.mode == SubmissionMode::Direct {
            phase.advance(PollPhase::Completed)?;
            return Ok(Submission {
                navigation: Navigation::Report(accepted.report_id.clone()),
                id: accepted.report_id,
                mode: self.mode,
                phase: phase.current(),
                polls: 0,
                message: accepted.message,
            });
        }

        phase.advance(PollPhase::Polling)?;
        let mut submission = self.follow(&accepted.report_id, observer).await?;
        submission.message = accepted.message;
        Ok(submission)
    }

    /// Poll an already-submitted job until its report can be shown.
    ///
    /// # Errors
    ///
    /// Same as [`Submitter::run`], minus submission errors.
    pub async fn follow<O: PollObserver>(
        &self,
        query_id: &str,
        observer: &O,
    ) -> Result<Submission, ApiError> {
        let outcome = StatusPoller::new(self.client, observer, self.policy)
            .run(query_id)
            .await?;

        match outcome {
            PollOutcome::Completed { polls } => {
                let report = self
                    .locator
                    .locate(self.client, query_id)
                    .await?
                    .ok_or_else(|| ApiError::ReportMissing {
                        query_id: query_id.to_string(),
                    })?;
                Ok(Submission {
                    id: query_id.to_string(),
                    mode: SubmissionMode::Poll,
                    phase: PollPhase::Completed,
                    navigation: Navigation::Report(report.id),
                    polls,
                    message: None,
                })
            }
            PollOutcome::Failed { message, .. } => Err(ApiError::QueryFailed {
                query_id: query_id.to_string(),
                message,
            }),
            PollOutcome::TimedOut { elapsed, .. } => Err(ApiError::TimedOut {
                waiting_for: format!("query {query_id}"),
                elapsed,
            }),
        }
    }
}

/// Client-side lifecycle tracker; rejects transitions the lifecycle forbids.
#[derive(Debug, Default)]
struct Phase(PollPhase);

impl Phase {
    const fn current(&self) -> PollPhase {
        self.0
    }

    fn advance(&mut self, next: PollPhase) -> Result<(), CoreError> {
        let from = self.current();
        if !from.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "submission".to_string(),
                from: from.to_string(),
                to: next.to_string(),
            });
        }
        tracing::debug!(%from, to = %next, "phase");
        self.0 = next;
        Ok(())
    }
}
