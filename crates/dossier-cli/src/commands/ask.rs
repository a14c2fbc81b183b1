use dossier_client::ErrorContext;
use dossier_client::workflow::{Submission, Submitter};
use dossier_core::Navigation;
use dossier_core::enums::SubmissionMode;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::commands::report;
use crate::commands::shared::api::describe;
use crate::commands::shared::browser::open_page;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::output::report::output_report;
use crate::progress::Progress;

#[derive(Serialize)]
struct AskResponse {
    #[serde(flatten)]
    submission: Submission,
    url: String,
}

#[derive(Serialize)]
struct DetachedResponse {
    id: String,
    message: Option<String>,
    next: String,
}

pub async fn handle(args: &AskArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mode = match args.mode.as_deref() {
        Some(raw) => parse_enum::<SubmissionMode>(raw, "mode")?,
        None => ctx.config.submission.mode,
    };
    let question = args.question();

    if args.detach {
        let accepted = ctx
            .client
            .submit_query(&question)
            .await
            .map_err(|error| describe(error, ErrorContext::Submit))?;
        let next = next_step(mode, &accepted.report_id);
        return output(
            &DetachedResponse {
                id: accepted.report_id,
                message: accepted.message,
                next,
            },
            flags.format,
        );
    }

    let progress = Progress::spinner("Submitting question...");
    let submission = match Submitter::from_config(&ctx.client, &ctx.config)
        .with_mode(mode)
        .run(&question, &progress)
        .await
    {
        Ok(submission) => {
            progress.finish_ok("Report ready");
            submission
        }
        Err(error) => {
            progress.finish_err("Query did not finish");
            return Err(describe(error, ErrorContext::Submit));
        }
    };
    let url = ctx.client.web_url(&submission.navigation);

    if args.show {
        if let Navigation::Report(report_id) = &submission.navigation {
            let view = report::fetch(ctx, report_id, true).await?;
            output_report(&view.report, flags.format)?;
        }
    } else {
        output(
            &AskResponse {
                submission,
                url: url.clone(),
            },
            flags.format,
        )?;
    }

    if args.open {
        open_page(&url)?;
    }
    Ok(())
}

/// The follow-up command for a detached submission.
fn next_step(mode: SubmissionMode, id: &str) -> String {
    match mode {
        SubmissionMode::Direct => format!("dossier report {id}"),
        SubmissionMode::Poll => format!("dossier status {id} --follow"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_hint_depends_on_mode() {
        assert_eq!(next_step(SubmissionMode::Direct, "12"), "dossier report 12");
        assert_eq!(
            next_step(SubmissionMode::Poll, "q1"),
            "dossier status q1 --follow"
        );
    }
}
