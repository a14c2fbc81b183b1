//! # dossier-core
//!
//! Core types and error types for Dossier.
//!
//! This crate provides the foundational types shared across all Dossier crates:
//! - Entity structs for the backend's domain objects (queries, reports)
//! - Status enums with state machine transitions
//! - Wire request/response bodies for the backend API
//! - Navigation outcomes produced by client workflows
//! - Id and timestamp serde adapters
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod navigation;
pub mod timestamps;
pub mod wire;

pub use navigation::Navigation;

/// Validate a question before submission.
///
/// # Errors
///
/// Returns [`errors::CoreError::Validation`] if the question is empty or
/// whitespace-only.
pub fn validate_question(question: &str) -> Result<&str, errors::CoreError> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return Err(errors::CoreError::Validation(
            "question must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::validate_question;

    #[test]
    fn rejects_blank_questions() {
        assert!(validate_question("").is_err());
        assert!(validate_question("   \n").is_err());
    }

    #[test]
    fn trims_questions() {
        assert_eq!(validate_question("  why? ").unwrap(), "why?");
    }
}
