use dossier_client::ErrorContext;
use dossier_core::entities::ReportSummary;
use dossier_core::timestamps;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::commands::shared::api::describe;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output_rows;

const HEADERS: [&str; 4] = ["id", "title", "question", "created"];

pub async fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut reports = ctx
        .client
        .list_reports()
        .await
        .map_err(|error| describe(error, ErrorContext::History))?;

    let limit = effective_limit(args.max, flags.limit, ctx.config.general.default_limit);
    truncate(&mut reports, limit);

    output_rows(&reports, &HEADERS, row, "No reports yet", flags.format)
}

fn row(report: &ReportSummary) -> Vec<String> {
    vec![
        report.id.clone(),
        report.title.clone(),
        report.question.clone(),
        timestamps::display_local(report.created_at),
    ]
}
