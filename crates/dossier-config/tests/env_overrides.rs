use std::time::Duration;

use dossier_config::DossierConfig;
use dossier_core::enums::SubmissionMode;
use figment::Jail;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("DOSSIER_SERVER__BASE_URL", "https://api.example.org");
        jail.set_env("DOSSIER_POLLING__TIMEOUT_SECS", "45");
        jail.set_env("DOSSIER_SUBMISSION__MODE", "direct");

        let config = DossierConfig::load().expect("config loads");
        assert_eq!(config.server.base_url, "https://api.example.org");
        assert_eq!(config.polling.deadline(), Some(Duration::from_secs(45)));
        assert_eq!(config.submission.mode, SubmissionMode::Direct);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dossier")?;
        jail.create_file(
            ".dossier/config.toml",
            r#"
[server]
base_url = "http://from-toml:8000"
"#,
        )?;
        jail.set_env("DOSSIER_SERVER__BASE_URL", "http://from-env:8000");

        let config = DossierConfig::load().expect("config loads");
        assert_eq!(config.server.base_url, "http://from-env:8000");
        Ok(())
    });
}

#[test]
fn single_underscore_env_var_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("DOSSIER_SERVER_BASE_URL", "http://typo:8000");

        let config = DossierConfig::load().expect("config loads");
        assert_eq!(config.server.base_url, "http://localhost:8000");
        Ok(())
    });
}
