//! Status enums and mode selectors for Dossier.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` to enforce
//! valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// QueryStatus
// ---------------------------------------------------------------------------

/// Status of a submitted research query, as reported by the backend.
///
/// ```text
/// pending → processing → completed
///                      → failed
/// pending → completed
///         → failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl QueryStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Processing, Self::Completed, Self::Failed],
            Self::Processing => &[Self::Completed, Self::Failed],
            Self::Completed | Self::Failed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// `completed` and `failed` end the polling loop.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Human-readable progress label shown while polling.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Query queued, waiting for a worker...",
            Self::Processing => "Researching your question...",
            Self::Completed => "Report ready",
            Self::Failed => "Query failed",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PollPhase
// ---------------------------------------------------------------------------

/// Client-side lifecycle of one submit-and-follow run.
///
/// ```text
/// idle → submitted → polling → completed
///                            → failed
///                            → timed_out
/// submitted → completed (direct submission)
///           → failed
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PollPhase {
    #[default]
    Idle,
    Submitted,
    Polling,
    Completed,
    Failed,
    TimedOut,
}

impl PollPhase {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Submitted, Self::Failed],
            Self::Submitted => &[Self::Polling, Self::Completed, Self::Failed],
            Self::Polling => &[Self::Completed, Self::Failed, Self::TimedOut],
            Self::Completed | Self::Failed | Self::TimedOut => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitted => "submitted",
            Self::Polling => "polling",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::TimedOut => "timed_out",
        }
    }
}

impl fmt::Display for PollPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SubmissionMode
// ---------------------------------------------------------------------------

/// What the id returned by `POST /api/query/submit` refers to.
///
/// `direct`: the backend generated the report synchronously and the id is a
/// report id. `poll`: the id is a job id that must be polled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionMode {
    Direct,
    #[default]
    Poll,
}

impl SubmissionMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Poll => "poll",
        }
    }
}

impl fmt::Display for SubmissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LookupStrategy
// ---------------------------------------------------------------------------

/// How a completed query is mapped to its report.
///
/// `listing`: fetch `/api/results/` once and index it by query id.
/// `direct`: call the keyed `/api/results/by-query/{id}` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LookupStrategy {
    #[default]
    Listing,
    Direct,
}

impl LookupStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Direct => "direct",
        }
    }
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
