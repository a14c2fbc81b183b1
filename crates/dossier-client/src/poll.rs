//! Status poller and report waiter.
//!
//! Both loops keep exactly one request in flight: the next delay starts only
//! after the previous response has resolved, so responses cannot arrive out
//! of order. Delays follow a capped exponential [`Backoff`] and both loops
//! share one optional deadline. Dropping the future cancels the loop.

use std::time::Duration;

use dossier_config::PollingConfig;
use dossier_core::entities::Report;
use dossier_core::enums::{PollPhase, QueryStatus};
use dossier_core::wire::StatusResponse;
use serde::Serialize;
use tokio::time::{Instant, sleep};

use crate::backoff::Backoff;
use crate::{ApiClient, ApiError};

/// Shown when the backend marks a query failed without a message.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Query processing failed";

// ── Sources & observers ────────────────────────────────────────────

/// Anything that can report the status of a query.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    async fn status(&self, query_id: &str) -> Result<StatusResponse, ApiError>;
}

/// Anything that can fetch a report by id, answering
/// [`ApiError::NotReady`] while it is being generated.
#[allow(async_fn_in_trait)]
pub trait ReportSource {
    async fn report(&self, report_id: &str) -> Result<Report, ApiError>;
}

impl StatusSource for ApiClient {
    async fn status(&self, query_id: &str) -> Result<StatusResponse, ApiError> {
        self.query_status(query_id).await
    }
}

impl ReportSource for ApiClient {
    async fn report(&self, report_id: &str) -> Result<Report, ApiError> {
        self.get_report(report_id).await
    }
}

/// Receives progress while a loop is running (the CLI spinner).
pub trait PollObserver {
    /// Called after every status poll with the 1-based attempt number.
    fn on_status(&self, _attempt: u32, _status: QueryStatus) {}

    /// Called after every report fetch that found the report not ready yet.
    fn on_report_pending(&self, _attempt: u32) {}
}

impl PollObserver for () {}

// ── Policy ─────────────────────────────────────────────────────────

/// Delay schedule plus overall deadline for one polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub backoff: Backoff,
    /// `None` polls until a terminal state.
    pub deadline: Option<Duration>,
}

impl PollPolicy {
    #[must_use]
    pub const fn status(config: &PollingConfig) -> Self {
        Self {
            backoff: Backoff::status(config),
            deadline: config.deadline(),
        }
    }

    #[must_use]
    pub const fn report(config: &PollingConfig) -> Self {
        Self {
            backoff: Backoff::report(config),
            deadline: config.deadline(),
        }
    }

    /// Whether sleeping `delay` more would overrun the deadline.
    fn exceeds_deadline(&self, elapsed: Duration, delay: Duration) -> bool {
        self.deadline
            .is_some_and(|deadline| elapsed.saturating_add(delay) > deadline)
    }
}

// ── Status poller ──────────────────────────────────────────────────

/// How a status polling loop ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PollOutcome {
    Completed { polls: u32 },
    Failed { message: String, polls: u32 },
    TimedOut { elapsed: Duration, polls: u32 },
}

impl PollOutcome {
    #[must_use]
    pub const fn phase(&self) -> PollPhase {
        match self {
            Self::Completed { .. } => PollPhase::Completed,
            Self::Failed { .. } => PollPhase::Failed,
            Self::TimedOut { .. } => PollPhase::TimedOut,
        }
    }

    #[must_use]
    pub const fn polls(&self) -> u32 {
        match self {
            Self::Completed { polls }
            | Self::Failed { polls, .. }
            | Self::TimedOut { polls, .. } => *polls,
        }
    }
}

/// Polls `GET /api/query/status/{id}` until the query is terminal.
pub struct StatusPoller<'a, S, O> {
    source: &'a S,
    observer: &'a O,
    policy: PollPolicy,
}

impl<'a, S: StatusSource, O: PollObserver> StatusPoller<'a, S, O> {
    pub const fn new(source: &'a S, observer: &'a O, policy: PollPolicy) -> Self {
        Self {
            source,
            observer,
            policy,
        }
    }

    /// Run the loop. The first poll happens after the initial delay.
    ///
    /// # Errors
    ///
    /// Any error from the status source ends the loop, including
    /// [`ApiError::Unauthorized`].
    pub async fn run(&self, query_id: &str) -> Result<PollOutcome, ApiError> {
        let started = Instant::now();
        let mut last = QueryStatus::Pending;
        let mut attempt: u32 = 0;

        loop {
            let delay = self.policy.backoff.delay(attempt);
            let elapsed = started.elapsed();
            if self.policy.exceeds_deadline(elapsed, delay) {
                tracing::info!(query_id, polls = attempt, "status polling timed out");
                return Ok(PollOutcome::TimedOut {
                    elapsed,
                    polls: attempt,
                });
            }
            sleep(delay).await;

            let StatusResponse {
                status,
                error_message,
            } = self.source.status(query_id).await?;
            attempt = attempt.saturating_add(1);

            if status != last && !last.can_transition_to(status) {
                tracing::warn!(query_id, from = %last, to = %status, "unexpected status transition");
            }
            last = status;
            self.observer.on_status(attempt, status);

            if !status.is_terminal() {
                tracing::debug!(query_id, attempt, %status, "query not finished");
                continue;
            }
            if status == QueryStatus::Failed {
                let message = error_message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                tracing::info!(query_id, polls = attempt, %message, "query failed");
                return Ok(PollOutcome::Failed {
                    message,
                    polls: attempt,
                });
            }
            tracing::info!(query_id, polls = attempt, "query completed");
            return Ok(PollOutcome::Completed { polls: attempt });
        }
    }
}

// ── Report waiter ──────────────────────────────────────────────────

/// A fetched report and how long it took to get it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportView {
    pub report: Report,
    /// Whether the first fetch found the report still generating.
    pub waited: bool,
    /// Fetches made after the first one.
    pub polls: u32,
}

/// Fetches a report, polling while the backend answers 404.
pub struct ReportWaiter<'a, S, O> {
    source: &'a S,
    observer: &'a O,
    policy: PollPolicy,
    wait: bool,
}

impl<'a, S: ReportSource, O: PollObserver> ReportWaiter<'a, S, O> {
    pub const fn new(source: &'a S, observer: &'a O, policy: PollPolicy) -> Self {
        Self {
            source,
            observer,
            policy,
            wait: true,
        }
    }

    /// Return [`ApiError::NotReady`] immediately instead of polling.
    #[must_use]
    pub const fn no_wait(mut self) -> Self {
        self.wait = false;
        self
    }

    /// Fetch the report, waiting for it if it is still being generated.
    ///
    /// While waiting, errors other than 401 are logged and polling continues.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] at any point, [`ApiError::TimedOut`] at the
    /// deadline, [`ApiError::NotReady`] in no-wait mode, and any error from
    /// the first fetch.
    pub async fn fetch(&self, report_id: &str) -> Result<ReportView, ApiError> {
        match self.source.report(report_id).await {
            Ok(report) => {
                return Ok(ReportView {
                    report,
                    waited: false,
                    polls: 0,
                });
            }
            Err(ApiError::NotReady { .. }) if self.wait => {
                tracing::debug!(report_id, "report still generating; waiting");
            }
            Err(error) => return Err(error),
        }

        let started = Instant::now();
        let mut attempt: u32 = 0;
        loop {
            let delay = self.policy.backoff.delay(attempt);
            let elapsed = started.elapsed();
            if self.policy.exceeds_deadline(elapsed, delay) {
                tracing::info!(report_id, polls = attempt, "report wait timed out");
                return Err(ApiError::TimedOut {
                    waiting_for: format!("report {report_id}"),
                    elapsed,
                });
            }
            sleep(delay).await;
            attempt = attempt.saturating_add(1);

            match self.source.report(report_id).await {
                Ok(report) => {
                    tracing::info!(report_id, polls = attempt, "report ready");
                    return Ok(ReportView {
                        report,
                        waited: true,
                        polls: attempt,
                    });
                }
                Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized),
                Err(ApiError::NotReady { .. }) => {
                    tracing::debug!(report_id, attempt, "report not ready");
                    self.observer.on_report_pending(attempt);
                }
                Err(error) => {
                    tracing::warn!(report_id, attempt, %error, "report poll failed; retrying");
                    self.observer.on_report_pending(attempt);
                }
            }
        }
    }
}
