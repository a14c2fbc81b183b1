/// Compute effective limit with precedence: local arg -> global flag -> configured default.
///
/// `None` means "no limit".
#[must_use]
pub const fn effective_limit(
    local: Option<u32>,
    global: Option<u32>,
    configured: Option<u32>,
) -> Option<u32> {
    match (local, global) {
        (Some(limit), _) | (None, Some(limit)) => Some(limit),
        (None, None) => configured,
    }
}

/// Keep at most `limit` items.
pub fn truncate<T>(items: &mut Vec<T>, limit: Option<u32>) {
    if let Some(limit) = limit {
        items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
}
