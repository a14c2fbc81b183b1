use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "dossier-cli";
const KEYRING_USER: &str = "session-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV_VAR: &str = "DOSSIER_AUTH__TOKEN";

/// Where the active token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

/// Returns the keyring service name.
///
/// Defaults to `"dossier-cli"`. Override via `DOSSIER_KEYRING_SERVICE` for
/// testing to avoid touching real credentials.
fn keyring_service() -> String {
    std::env::var("DOSSIER_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

fn keyring_entry() -> Option<keyring::Entry> {
    keyring::Entry::new(&keyring_service(), KEYRING_USER).ok()
}

/// Store a token in the OS keychain. Falls back to file if keyring unavailable.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store(token: &str) -> Result<(), AuthError> {
    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(token) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file_at(&credentials_path()?, token)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file_at(&credentials_path()?, token)
        }
    }
}

/// Load a token together with the tier it came from.
///
/// Priority: keyring → `DOSSIER_AUTH__TOKEN` env → file (`~/.dossier/credentials`).
#[must_use]
pub fn load_with_source() -> Option<(String, TokenSource)> {
    if let Some(token) = keyring_entry()
        .and_then(|entry| entry.get_password().ok())
        .filter(|t| !t.is_empty())
    {
        return Some((token, TokenSource::Keyring));
    }

    if let Some(token) = std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty()) {
        return Some((token, TokenSource::Env));
    }

    let path = credentials_path().ok()?;
    load_file_at(&path).map(|token| (token, TokenSource::File))
}

/// Delete stored credentials from keyring and file.
///
/// The env var tier is left alone; it is owned by the caller's shell.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // Missing entries are fine.
    if let Some(entry) = keyring_entry() {
        let _ = entry.delete_credential();
    }
    delete_file_at(&credentials_path()?)
}

// --- File helpers ---

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".dossier").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found; cannot store credentials".into())
        })
}

fn store_file_at(path: &Path, token: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, token)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file_at(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn delete_file_at(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_path_is_under_home() {
        let path = credentials_path().expect("should resolve");
        assert!(path.ends_with(".dossier/credentials"));
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("nested").join("credentials");

        store_file_at(&creds_path, "test_token_abc123").expect("store");
        assert_eq!(load_file_at(&creds_path).as_deref(), Some("test_token_abc123"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&creds_path)
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "credentials file should be 0600");
        }

        delete_file_at(&creds_path).expect("delete");
        assert!(!creds_path.exists());
        // Deleting twice is not an error.
        delete_file_at(&creds_path).expect("second delete");
    }

    #[test]
    fn load_file_ignores_empty_content() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("credentials");

        std::fs::write(&creds_path, "   \n  ").expect("write");
        assert!(load_file_at(&creds_path).is_none(), "whitespace-only should return None");
    }

    #[test]
    fn load_file_trims_trailing_newline() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("credentials");

        std::fs::write(&creds_path, "tok\n").expect("write");
        assert_eq!(load_file_at(&creds_path).as_deref(), Some("tok"));
    }

    #[test]
    fn token_source_labels() {
        assert_eq!(TokenSource::Keyring.as_str(), "keyring");
        assert_eq!(TokenSource::Env.as_str(), "env");
        assert_eq!(TokenSource::File.as_str(), "file");
    }
}
