//! Polling cadence for the status poller and the report waiter.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_status_interval_ms() -> u64 {
    3_000
}

const fn default_report_interval_ms() -> u64 {
    5_000
}

const fn default_max_interval_ms() -> u64 {
    30_000
}

const fn default_backoff_factor() -> u32 {
    2
}

const fn default_timeout_secs() -> u64 {
    600
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingConfig {
    /// First delay between status polls, in milliseconds.
    #[serde(default = "default_status_interval_ms")]
    pub status_interval_ms: u64,

    /// First delay between report fetches while a report is not ready.
    #[serde(default = "default_report_interval_ms")]
    pub report_interval_ms: u64,

    /// Upper bound for the backoff delay, in milliseconds.
    #[serde(default = "default_max_interval_ms")]
    pub max_interval_ms: u64,

    /// Multiplier applied to the delay after each unfinished poll.
    #[serde(default = "default_backoff_factor")]
    pub backoff_factor: u32,

    /// Overall deadline shared by both polling loops. `0` disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            status_interval_ms: default_status_interval_ms(),
            report_interval_ms: default_report_interval_ms(),
            max_interval_ms: default_max_interval_ms(),
            backoff_factor: default_backoff_factor(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PollingConfig {
    #[must_use]
    pub const fn status_interval(&self) -> Duration {
        Duration::from_millis(self.status_interval_ms)
    }

    #[must_use]
    pub const fn report_interval(&self) -> Duration {
        Duration::from_millis(self.report_interval_ms)
    }

    #[must_use]
    pub const fn max_interval(&self) -> Duration {
        Duration::from_millis(self.max_interval_ms)
    }

    /// `None` when polling may run indefinitely.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.status_interval_ms == 0 {
            return Err(ConfigError::invalid(
                "polling.status_interval_ms",
                "must be greater than zero",
            ));
        }
        if self.report_interval_ms == 0 {
            return Err(ConfigError::invalid(
                "polling.report_interval_ms",
                "must be greater than zero",
            ));
        }
        if self.backoff_factor == 0 {
            return Err(ConfigError::invalid(
                "polling.backoff_factor",
                "must be at least 1",
            ));
        }
        if self.max_interval_ms < self.status_interval_ms.max(self.report_interval_ms) {
            return Err(ConfigError::invalid(
                "polling.max_interval_ms",
                "must not be smaller than the initial intervals",
            ));
        }
        Ok(())
    }
}
