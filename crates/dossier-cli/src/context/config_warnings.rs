use dossier_config::ENV_PREFIX;

/// Config sections that `DOSSIER_<SECTION>__<KEY>` variables may target.
const SECTIONS: &[&str] = &["SERVER", "POLLING", "SUBMISSION", "GENERAL", "AUTH"];

/// Variables read directly rather than through the config layers.
const STANDALONE: &[&str] = &["DOSSIER_LOG", "DOSSIER_KEYRING_SERVICE"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured() {
    for warning in collect_unconfigured_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with(ENV_PREFIX) && !STANDALONE.contains(&key.as_str()))
        .collect::<Vec<_>>();
    keys.sort();

    keys.into_iter()
        .filter_map(|key| {
            let rest = &key[ENV_PREFIX.len()..];
            if let Some((section, _)) = rest.split_once("__") {
                if SECTIONS.contains(&section) {
                    return None;
                }
                return Some(format!(
                    "{key} targets unknown config section '{}'. Known sections: {}.",
                    section.to_ascii_lowercase(),
                    SECTIONS.join(", ").to_ascii_lowercase()
                ));
            }
            let section = SECTIONS.iter().find(|s| rest.starts_with(&format!("{s}_")))?;
            Some(format!(
                "{key} is ignored. Use double underscores (example: {ENV_PREFIX}{section}__{}).",
                &rest[section.len() + 1..]
            ))
        })
        .collect()
}
