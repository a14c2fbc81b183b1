use dossier_client::ErrorContext;

use super::login::{read_password, start_session};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::commands::shared::api::describe;
use crate::context::AppContext;

pub async fn handle(
    args: &AuthRegisterArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.username.trim().is_empty() {
        anyhow::bail!("auth register: --username must not be empty");
    }
    let password = read_password(&args.password, std::io::stdin().lock())?;

    let outcome = ctx
        .client
        .register(&args.username, &args.email, &password)
        .await
        .map_err(|error| describe(error, ErrorContext::Register))?;

    start_session(ctx, outcome, &args.email, flags)
}
