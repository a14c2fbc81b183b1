use dossier_client::poll::PollObserver;
use dossier_core::enums::QueryStatus;
use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Spinner shown while a polling loop runs. Inert when progress is disabled.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    pub fn finish_ok(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}

impl PollObserver for Progress {
    fn on_status(&self, attempt: u32, status: QueryStatus) {
        self.set_message(&status_message(attempt, status));
    }

    fn on_report_pending(&self, attempt: u32) {
        self.set_message(&format!("Report is still being generated (check {attempt})"));
    }
}

fn status_message(attempt: u32, status: QueryStatus) -> String {
    format!("{} (check {attempt})", status.label())
}
