use anyhow::Context;
use dossier_config::DossierConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<DossierConfig> {
    load_project_dotenv()?;

    let mut config = DossierConfig::load().context("failed to load dossier configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut DossierConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(server) = &flags.server {
        config.server.base_url.clone_from(server);
        config
            .validate()
            .with_context(|| format!("invalid --server '{server}'"))?;
    }
    Ok(())
}

fn load_project_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;

    // Prefer the .env next to a project .dossier directory.
    for dir in cwd.ancestors() {
        if dir.join(".dossier").is_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).with_context(|| {
                    format!("failed to load dotenv file at {}", env_path.display())
                })?;
                return Ok(());
            }
            break;
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}
