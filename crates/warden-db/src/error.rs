//! Database error types for warden-db.

use thiserror::Error;
use warden_core::errors::CoreError;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error. Storage failures surface here unmodified.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Filter criteria could not be turned into a query.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether the caller supplied bad input (as opposed to a storage fault).
    #[must_use]
    pub const fn is_client_fault(&self) -> bool {
        match self {
            Self::Core(e) => e.is_client_fault(),
            _ => false,
        }
    }
}
