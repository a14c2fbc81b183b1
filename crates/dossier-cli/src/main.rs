use anyhow::Context;
use clap::Parser;
use dossier_client::ApiError;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

/// Exit code for "the session is missing or expired".
const EXIT_UNAUTHORIZED: i32 = 2;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        if is_unauthorized(&error) {
            eprintln!("dossier: not logged in or session expired. Run `dossier auth login`.");
            std::process::exit(EXIT_UNAUTHORIZED);
        }
        eprintln!("dossier error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;
    context::warn_unconfigured();

    let mut ctx = context::AppContext::init(config)
        .context("failed to initialize dossier client")?;

    commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await
}

fn is_unauthorized(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<ApiError>()
        .is_some_and(ApiError::is_unauthorized)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DOSSIER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use dossier_client::{ApiError, ErrorContext};

    use super::is_unauthorized;
    use crate::commands::shared::api::describe;

    #[test]
    fn unauthorized_is_detected_through_context() {
        let error = describe(ApiError::Unauthorized, ErrorContext::History);
        assert!(is_unauthorized(&error));
    }

    #[test]
    fn other_errors_are_not_unauthorized() {
        let error = describe(
            ApiError::Api {
                status: 500,
                detail: None,
            },
            ErrorContext::History,
        );
        assert!(!is_unauthorized(&error));
        assert!(!is_unauthorized(&anyhow::anyhow!("plain")));
    }
}
