//! Resource identifier handling.
//!
//! The backend emits integer primary keys while other deployments use string
//! ids. Both are carried as `String` on the client side.

use serde::{Deserialize, Deserializer};

use crate::errors::CoreError;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// Deserialize an id given as either a JSON number or a JSON string.
///
/// # Errors
///
/// Fails if the value is neither an unsigned integer nor a string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Optional variant of [`deserialize`] for fields that may be absent or null.
///
/// # Errors
///
/// Fails if a present value is neither an unsigned integer nor a string.
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

/// Whether a user-supplied id is usable as a path segment.
#[must_use]
pub fn is_valid(id: &str) -> bool {
    let trimmed = id.trim();
    !trimmed.is_empty() && trimmed.len() == id.len() && !id.contains('/')
}

/// Reject an id that would not address a single `kind` resource.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming `kind` when [`is_valid`] fails.
pub fn require(kind: &str, id: &str) -> Result<(), CoreError> {
    if is_valid(id) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("invalid {kind} id: {id:?}")))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "super::deserialize")]
        id: String,
        #[serde(default, deserialize_with = "super::deserialize_opt")]
        parent: Option<String>,
    }

    #[test]
    fn accepts_numeric_ids() {
        let h: Holder = serde_json::from_str(r#"{"id": 42, "parent": 7}"#).unwrap();
        assert_eq!(h.id, "42");
        assert_eq!(h.parent.as_deref(), Some("7"));
    }

    #[test]
    fn accepts_string_ids() {
        let h: Holder = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(h.id, "abc");
        assert!(h.parent.is_none());
    }

    #[test]
    fn null_parent_is_none() {
        let h: Holder = serde_json::from_str(r#"{"id": "abc", "parent": null}"#).unwrap();
        assert!(h.parent.is_none());
    }

    #[test]
    fn rejects_boolean_ids() {
        assert!(serde_json::from_str::<Holder>(r#"{"id": true}"#).is_err());
    }

    #[test]
    fn path_segment_validation() {
        assert!(super::is_valid("r1"));
        assert!(!super::is_valid(""));
        assert!(!super::is_valid(" r1"));
        assert!(!super::is_valid("a/b"));
    }

    #[test]
    fn require_names_the_resource() {
        assert!(super::require("report", "12").is_ok());
        let err = super::require("report", "").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: invalid report id: \"\"");
    }
}
