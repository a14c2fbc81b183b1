use dossier_client::ErrorContext;
use dossier_client::workflow::Submitter;
use dossier_core::enums::QueryStatus;
use dossier_core::wire::StatusResponse;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatusArgs;
use crate::commands::shared::api::describe;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct StatusView {
    id: String,
    status: QueryStatus,
    label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl StatusView {
    fn new(id: &str, response: StatusResponse) -> Self {
        Self {
            id: id.to_string(),
            status: response.status,
            label: response.status.label(),
            error_message: response.error_message,
        }
    }
}

pub async fn handle(args: &StatusArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.follow {
        let response = ctx
            .client
            .query_status(&args.id)
            .await
            .map_err(|error| describe(error, ErrorContext::Status))?;
        return output(&StatusView::new(&args.id, response), flags.format);
    }

    let progress = Progress::spinner("Checking query status...");
    match Submitter::from_config(&ctx.client, &ctx.config)
        .follow(&args.id, &progress)
        .await
    {
        Ok(submission) => {
            progress.finish_ok("Report ready");
            output(&submission, flags.format)
        }
        Err(error) => {
            progress.finish_err("Query did not finish");
            Err(describe(error, ErrorContext::Status))
        }
    }
}
