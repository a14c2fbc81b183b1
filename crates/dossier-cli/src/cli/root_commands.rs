use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::AuthCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Submit a research question and wait for its report.
    Ask(AskArgs),
    /// Check (or follow) the status of a submitted query.
    Status(StatusArgs),
    /// Show a report, waiting for it if it is still being generated.
    Report(ReportArgs),
    /// List previous reports, newest first.
    History(HistoryArgs),
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
}

/// Arguments for `dossier ask`.
#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// The question (words are joined with spaces).
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
    /// Submission mode: direct or poll (defaults to submission.mode).
    #[arg(long)]
    pub mode: Option<String>,
    /// Print the job id and return without polling.
    #[arg(long)]
    pub detach: bool,
    /// Print the finished report instead of just its id.
    #[arg(long)]
    pub show: bool,
    /// Open the finished report in a browser.
    #[arg(long)]
    pub open: bool,
}

impl AskArgs {
    #[must_use]
    pub fn question(&self) -> String {
        self.words.join(" ")
    }
}

/// Arguments for `dossier status`.
#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    /// Query (job) id returned by `dossier ask --detach`.
    pub id: String,
    /// Keep polling until the query finishes.
    #[arg(long)]
    pub follow: bool,
}

/// Arguments for `dossier report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Report id.
    pub id: String,
    /// Fail immediately if the report is not ready instead of waiting.
    #[arg(long)]
    pub no_wait: bool,
    /// Write the report as a markdown document to this path.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
    /// Open the report page in a browser.
    #[arg(long)]
    pub open: bool,
}

/// Arguments for `dossier history`.
#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Show at most this many reports (overrides --limit).
    #[arg(long)]
    pub max: Option<u32>,
}
