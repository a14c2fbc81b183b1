//! Capped exponential backoff for the polling loops.

use std::time::Duration;

use dossier_config::PollingConfig;

/// Delay schedule: `initial × factor^attempt`, capped at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    /// Delay before the first poll.
    pub initial: Duration,
    /// Multiplier applied after each unfinished poll.
    pub factor: u32,
    /// Upper bound on any single delay.
    pub max: Duration,
}

impl Backoff {
    #[must_use]
    pub const fn new(initial: Duration, factor: u32, max: Duration) -> Self {
        Self {
            initial,
            factor,
            max,
        }
    }

    /// Schedule for status polls (3 s, ×2, 30 s by default).
    #[must_use]
    pub const fn status(config: &PollingConfig) -> Self {
        Self::new(
            config.status_interval(),
            config.backoff_factor,
            config.max_interval(),
        )
    }

    /// Schedule for report fetches while the report is not ready (5 s, ×2, 30 s).
    #[must_use]
    pub const fn report(config: &PollingConfig) -> Self {
        Self::new(
            config.report_interval(),
            config.backoff_factor,
            config.max_interval(),
        )
    }

    /// Delay to wait before poll number `attempt` (0-based).
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        let multiplier = self.factor.max(1).saturating_pow(attempt);
        self.initial.saturating_mul(multiplier).min(self.max)
    }
}
