//! User repository.

use warden_core::entities::User;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, now, parse_datetime};
use crate::service::WardenService;

const SELECT_COLS: &str = "id, name, email, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl WardenService {
    /// Insert a user. Emails are unique.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the email is already taken.
    pub async fn create_user(&self, name: &str, email: &str) -> Result<User, DatabaseError> {
        let now = now();
        self.db()
            .conn()
            .execute(
                "INSERT INTO users (name, email, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![name, email, format_datetime(&now)],
            )
            .await?;
        let id = self.db().last_insert_id();
        tracing::info!(user_id = id, "created user");

        Ok(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no user has this id.
    pub async fn get_user(&self, id: i64) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_users(&self, limit: u32) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users ORDER BY name, id LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }
}
