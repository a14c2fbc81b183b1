//! Cross-cutting error types for Dossier.
//!
//! Transport errors live in `dossier-client` (`ApiError`); a unified error is
//! deferred to `dossier-cli` where all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any Dossier crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        from: String,
        to: String,
    },

    /// Input failed validation before reaching the server.
    #[error("Validation error: {0}")]
    Validation(String),
}
