use dossier_client::{ApiError, ErrorContext};

/// Wrap an API error with the message a user should see for `context`.
///
/// The original error stays downcastable, so `main` can still spot 401s.
pub fn describe(error: ApiError, context: ErrorContext) -> anyhow::Error {
    if let Some(navigation) = error.navigation() {
        tracing::debug!(to = %navigation.web_path(), "redirect required");
    }
    let message = error.user_message(context);
    anyhow::Error::new(error).context(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_leads_and_source_is_kept() {
        let error = describe(
            ApiError::Api {
                status: 500,
                detail: None,
            },
            ErrorContext::History,
        );
        assert_eq!(error.to_string(), "Failed to load reports");
        assert!(error.downcast_ref::<ApiError>().is_some());
    }

    #[test]
    fn unreadable_body_uses_fallback_wording() {
        let error = describe(
            ApiError::Parse("bad body".into()),
            ErrorContext::Report,
        );
        assert_eq!(error.to_string(), "Failed to load report");
    }
}
