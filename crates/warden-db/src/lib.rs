//! # warden-db
//!
//! libSQL storage for Warden: users, buildings, tasks, and comments.
//!
//! Repository methods live on [`service::WardenService`]. Filtered task
//! listing goes through [`query::TaskSelect`], the SQL implementation of
//! `warden_core::filter::TaskQuery`: every filter value is bound as a
//! parameter, never spliced into the statement text.

pub mod error;
pub mod helpers;
mod migrations;
pub mod query;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Warden state.
///
/// Wraps a libSQL database and connection.
pub struct WardenDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl WardenDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let warden_db = Self { db, conn };
        warden_db.run_migrations().await?;
        tracing::debug!(path, "opened local database");
        Ok(warden_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Row id assigned by the most recent successful INSERT on this connection.
    #[must_use]
    pub fn last_insert_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}
