//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use std::time::Duration;

use dossier_config::DossierConfig;
use dossier_core::enums::{LookupStrategy, SubmissionMode};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_server_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
base_url = "https://dossier.example.com/"
request_timeout_secs = 12
lookup = "direct"
"#,
        )?;

        let config: DossierConfig = Figment::from(Serialized::defaults(DossierConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.base(), "https://dossier.example.com");
        assert_eq!(config.server.request_timeout(), Duration::from_secs(12));
        assert_eq!(config.server.lookup, LookupStrategy::Direct);
        Ok(())
    });
}

#[test]
fn loads_polling_and_submission_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[polling]
status_interval_ms = 1000
report_interval_ms = 2000
max_interval_ms = 8000
backoff_factor = 3
timeout_secs = 0

[submission]
mode = "direct"

[general]
default_limit = 5
"#,
        )?;

        let config: DossierConfig = Figment::from(Serialized::defaults(DossierConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.polling.status_interval(), Duration::from_secs(1));
        assert_eq!(config.polling.report_interval(), Duration::from_secs(2));
        assert_eq!(config.polling.max_interval(), Duration::from_secs(8));
        assert_eq!(config.polling.backoff_factor, 3);
        assert!(config.polling.deadline().is_none());
        assert_eq!(config.submission.mode, SubmissionMode::Direct);
        assert_eq!(config.general.default_limit, Some(5));
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults_for_missing_fields() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[polling]
timeout_secs = 120
"#,
        )?;

        let config: DossierConfig = Figment::from(Serialized::defaults(DossierConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.polling.deadline(), Some(Duration::from_secs(120)));
        assert_eq!(config.polling.status_interval_ms, 3_000);
        assert_eq!(config.server.base_url, "http://localhost:8000");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up_by_figment_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dossier")?;
        jail.create_file(
            ".dossier/config.toml",
            r#"
[server]
base_url = "http://10.0.0.5:9000"
"#,
        )?;

        let config = DossierConfig::load().expect("config loads");
        assert_eq!(config.server.base_url, "http://10.0.0.5:9000");
        Ok(())
    });
}

#[test]
fn invalid_values_are_rejected_after_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
base_url = "localhost:8000"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(DossierConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = DossierConfig::from_figment(&figment).expect_err("should reject");
        assert!(err.to_string().contains("server.base_url"));
        Ok(())
    });
}

#[test]
fn unknown_lookup_strategy_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
lookup = "psychic"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(DossierConfig::default()))
            .merge(Toml::file("config.toml"));
        assert!(DossierConfig::from_figment(&figment).is_err());
        Ok(())
    });
}
