use std::io::BufRead;

use anyhow::Context;
use dossier_client::{ErrorContext, LoginOutcome};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::{AuthLoginArgs, PasswordArgs};
use crate::commands::shared::api::describe;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    email: String,
    message: Option<String>,
    expires_at: Option<String>,
    redirect: String,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = read_password(&args.password, std::io::stdin().lock())?;

    let outcome = ctx
        .client
        .login(&args.email, &password)
        .await
        .map_err(|error| describe(error, ErrorContext::Login))?;

    start_session(ctx, outcome, &args.email, flags)
}

/// Store the session from a login or registration and report it.
pub(super) fn start_session(
    ctx: &mut AppContext,
    outcome: LoginOutcome,
    email: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    dossier_auth::store_token(&outcome.token).context("failed to store session token")?;
    let expires_at = dossier_auth::expiry::decode_expiry(&outcome.token)
        .ok()
        .map(|at| at.to_rfc3339());
    ctx.client.set_token(Some(outcome.token));

    output(
        &AuthLoginResponse {
            authenticated: true,
            email: email.trim().to_string(),
            message: outcome.message,
            expires_at,
            redirect: outcome.navigation.web_path(),
        },
        flags.format,
    )
}

pub(super) fn read_password(args: &PasswordArgs, mut stdin: impl BufRead) -> anyhow::Result<String> {
    let password = match (&args.password, args.password_stdin) {
        (Some(password), _) => password.clone(),
        (None, true) => {
            let mut line = String::new();
            stdin
                .read_line(&mut line)
                .context("failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
        (None, false) => {
            anyhow::bail!("pass --password <PASSWORD> or --password-stdin")
        }
    };
    if password.is_empty() {
        anyhow::bail!("password must not be empty");
    }
    Ok(password)
}
