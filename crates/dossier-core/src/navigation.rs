//! Where the user should go next after a workflow step.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of a client workflow, expressed as a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "target", content = "value", rename_all = "snake_case")]
pub enum Navigation {
    /// Show the report with this id.
    Report(String),
    /// The session is missing or expired.
    Login,
    /// Landing page.
    Home,
    /// Any other server-supplied path.
    Path(String),
}

impl Navigation {
    /// Map a server-supplied redirect (`/`, `/login`, `/results/7`, ...) to a
    /// destination, defaulting to [`Navigation::Home`].
    #[must_use]
    pub fn from_redirect(redirect: Option<&str>) -> Self {
        let Some(path) = redirect.map(str::trim).filter(|p| !p.is_empty()) else {
            return Self::Home;
        };
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/login" => Self::Login,
            other => other
                .strip_prefix("/results/")
                .filter(|id| crate::ids::is_valid(id))
                .map_or_else(|| Self::Path(path.to_string()), |id| Self::Report(id.to_string())),
        }
    }

    /// Path of the corresponding web page.
    #[must_use]
    pub fn web_path(&self) -> String {
        match self {
            Self::Report(id) => format!("/results/{id}"),
            Self::Login => "/login".to_string(),
            Self::Home => "/".to_string(),
            Self::Path(path) => path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Navigation;

    #[rstest]
    #[case(None, Navigation::Home)]
    #[case(Some(""), Navigation::Home)]
    #[case(Some("/"), Navigation::Home)]
    #[case(Some("/login"), Navigation::Login)]
    #[case(Some("/results/abc"), Navigation::Report("abc".into()))]
    #[case(Some("/query"), Navigation::Path("/query".into()))]
    fn maps_redirects(#[case] redirect: Option<&str>, #[case] expected: Navigation) {
        assert_eq!(Navigation::from_redirect(redirect), expected);
    }

    #[test]
    fn web_paths_roundtrip_through_redirects() {
        for nav in [
            Navigation::Report("r1".into()),
            Navigation::Login,
            Navigation::Home,
            Navigation::Path("/history".into()),
        ] {
            assert_eq!(Navigation::from_redirect(Some(&nav.web_path())), nav);
        }
    }
}
