use std::path::Path;

use anyhow::Context;
use dossier_client::poll::{PollPolicy, ReportView, ReportWaiter};
use dossier_client::ErrorContext;
use dossier_core::Navigation;
use dossier_core::entities::Report;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::commands::shared::api::describe;
use crate::commands::shared::browser::open_page;
use crate::context::AppContext;
use crate::output::output;
use crate::output::report::output_report;
use crate::progress::Progress;

#[derive(Serialize)]
struct ExportResponse {
    id: String,
    path: String,
    bytes: usize,
}

pub async fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = fetch(ctx, &args.id, !args.no_wait).await?;

    if let Some(path) = &args.export {
        let bytes = export_report(&view.report, path)?;
        output(
            &ExportResponse {
                id: view.report.id.clone(),
                path: path.display().to_string(),
                bytes,
            },
            flags.format,
        )?;
    } else {
        output_report(&view.report, flags.format)?;
    }

    if args.open {
        open_page(&ctx.client.web_url(&Navigation::Report(view.report.id)))?;
    }
    Ok(())
}

/// Load a report, showing a spinner while it is still being generated.
pub async fn fetch(ctx: &AppContext, report_id: &str, wait: bool) -> anyhow::Result<ReportView> {
    let progress = Progress::spinner("Loading report...");
    let waiter = ReportWaiter::new(
        &ctx.client,
        &progress,
        PollPolicy::report(&ctx.config.polling),
    );
    let waiter = if wait { waiter } else { waiter.no_wait() };

    match waiter.fetch(report_id).await {
        Ok(view) => {
            progress.finish_clear();
            if view.waited {
                tracing::info!(report_id, polls = view.polls, "report became available");
            }
            Ok(view)
        }
        Err(error) => {
            progress.finish_err("Failed to load report");
            Err(describe(error, ErrorContext::Report))
        }
    }
}

/// Write `report` as a markdown document; returns the bytes written.
fn export_report(report: &Report, path: &Path) -> anyhow::Result<usize> {
    let markdown = report.to_markdown();
    std::fs::write(path, &markdown)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(markdown.len())
}
