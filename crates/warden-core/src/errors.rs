//! Cross-cutting error types for Warden.
//!
//! This module defines errors that can originate from any crate in the system.
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! are defined in their respective crates and wrap `CoreError` where needed.

use thiserror::Error;

/// Errors that can be raised by any Warden crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The supplied zone name is not a recognized IANA identifier.
    #[error("Invalid timezone: '{timezone}'")]
    InvalidTimezone { timezone: String },

    /// The supplied string is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{date}': {reason}")]
    InvalidDate { date: String, reason: String },

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Whether this error was caused by client-supplied input rather than
    /// by the system itself.
    #[must_use]
    pub const fn is_client_fault(&self) -> bool {
        matches!(
            self,
            Self::InvalidTimezone { .. } | Self::InvalidDate { .. } | Self::Validation(_)
        )
    }
}
