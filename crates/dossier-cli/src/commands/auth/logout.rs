use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    redirect: String,
}

/// End the server session, then always clear the local token.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let navigation = ctx.client.logout().await;
    dossier_auth::logout().context("failed to clear stored session token")?;
    ctx.client.set_token(None);
    ctx.token_source = None;

    output(
        &AuthLogoutResponse {
            cleared: true,
            redirect: navigation.web_path(),
        },
        flags.format,
    )
}
