/// Upper bound on rows returned by one list command.
pub const MAX_LIMIT: u32 = 500;

/// Compute effective limit with precedence: local arg -> configured default,
/// kept within `1..=MAX_LIMIT`.
#[must_use]
pub fn effective_limit(local: Option<u32>, configured: u32) -> u32 {
    local.unwrap_or(configured).clamp(1, MAX_LIMIT)
}
