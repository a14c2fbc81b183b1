use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `dossier auth login`")]
    NotAuthenticated,

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("invalid session token: {0}")]
    InvalidToken(String),
}
