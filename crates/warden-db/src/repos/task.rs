//! Task repository: CRUD and filtered listing.

use chrono::{DateTime, SubsecRound, Utc};

use warden_core::entities::Task;
use warden_core::enums::TaskStatus;
use warden_core::filter::{self, FilterCriteria};

use crate::error::DatabaseError;
use crate::helpers::{
    format_datetime, get_opt_string, now, parse_datetime, parse_enum, parse_optional_datetime,
};
use crate::query::{TASK_COLUMNS, TaskSelect};
use crate::service::WardenService;
use crate::updates::task::TaskUpdate;

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        building_id: row.get(1)?,
        created_by: row.get::<Option<i64>>(2)?,
        assigned_to: row.get::<Option<i64>>(3)?,
        title: row.get(4)?,
        description: get_opt_string(row, 5)?,
        status: parse_enum(&row.get::<String>(6)?)?,
        due_at: parse_optional_datetime(get_opt_string(row, 7)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

/// Fields for a task insert. Status defaults to `Open`, `created_at` to now.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub building_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub created_by: Option<i64>,
    pub assigned_to: Option<i64>,
    pub status: TaskStatus,
    pub due_at: Option<DateTime<Utc>>,
    /// Explicit creation instant, for imports. Truncated to microseconds.
    pub created_at: Option<DateTime<Utc>>,
}

impl NewTask {
    #[must_use]
    pub fn new(building_id: i64, title: impl Into<String>) -> Self {
        Self {
            building_id,
            title: title.into(),
            description: None,
            created_by: None,
            assigned_to: None,
            status: TaskStatus::Open,
            due_at: None,
            created_at: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn created_by(mut self, user_id: i64) -> Self {
        self.created_by = Some(user_id);
        self
    }

    #[must_use]
    pub const fn assigned_to(mut self, user_id: i64) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at.trunc_subsecs(6));
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at.trunc_subsecs(6));
        self
    }
}

impl WardenService {
    /// Insert a task into an existing building.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the building does not exist, or
    /// `DatabaseError::LibSql` if a user reference is dangling.
    pub async fn create_task(&self, new: &NewTask) -> Result<Task, DatabaseError> {
        self.get_building(new.building_id).await?;

        let updated_at = now();
        let created_at = new.created_at.unwrap_or(updated_at);

        self.db()
            .conn()
            .execute(
                "INSERT INTO tasks (building_id, created_by, assigned_to, title, description,
                                    status, due_at, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                libsql::params![
                    new.building_id,
                    new.created_by,
                    new.assigned_to,
                    new.title.as_str(),
                    new.description.as_deref(),
                    new.status.as_str(),
                    new.due_at.as_ref().map(format_datetime),
                    format_datetime(&created_at),
                    format_datetime(&updated_at)
                ],
            )
            .await?;
        let id = self.db().last_insert_id();
        tracing::info!(task_id = id, building_id = new.building_id, "created task");

        Ok(Task {
            id,
            building_id: new.building_id,
            created_by: new.created_by,
            assigned_to: new.assigned_to,
            title: new.title.clone(),
            description: new.description.clone(),
            status: new.status,
            due_at: new.due_at,
            created_at,
            updated_at,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no task has this id.
    pub async fn get_task(&self, id: i64) -> Result<Task, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_task(&row)
    }

    /// Apply the `Some` fields of `update`. `created_at` is never touched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no task has this id.
    pub async fn update_task(
        &self,
        task_id: i64,
        update: TaskUpdate,
    ) -> Result<Task, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref title) = update.title {
            params.push(title.clone().into());
            sets.push(format!("title = ?{}", params.len()));
        }
        if let Some(ref description) = update.description {
            params.push(description.clone().map_or(libsql::Value::Null, Into::into));
            sets.push(format!("description = ?{}", params.len()));
        }
        if let Some(status) = update.status {
            params.push(status.as_str().into());
            sets.push(format!("status = ?{}", params.len()));
        }
        if let Some(assigned_to) = update.assigned_to {
            params.push(assigned_to.map_or(libsql::Value::Null, Into::into));
            sets.push(format!("assigned_to = ?{}", params.len()));
        }
        if let Some(due_at) = update.due_at {
            params.push(due_at.map_or(libsql::Value::Null, |dt| {
                format_datetime(&dt.trunc_subsecs(6)).into()
            }));
            sets.push(format!("due_at = ?{}", params.len()));
        }

        if sets.is_empty() {
            return self.get_task(task_id).await;
        }

        params.push(format_datetime(&now()).into());
        sets.push(format!("updated_at = ?{}", params.len()));

        params.push(task_id.into());
        let sql = format!(
            "UPDATE tasks SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        tracing::info!(task_id, "updated task");
        self.get_task(task_id).await
    }

    /// Delete a task and its comments.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no task has this id.
    pub async fn delete_task(&self, task_id: i64) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM tasks WHERE id = ?1", [task_id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(task_id, "deleted task");
        Ok(())
    }

    /// Newest tasks of one building, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_tasks_for_building(
        &self,
        building_id: i64,
        limit: u32,
    ) -> Result<Vec<Task>, DatabaseError> {
        self.fetch_tasks(&TaskSelect::for_building(building_id).limit(limit))
            .await
    }

    /// Tasks across all buildings matching every constraint in `criteria`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` for an invalid date or timezone (before
    /// any SQL runs), or the storage error unchanged.
    pub async fn filter_tasks(
        &self,
        criteria: &FilterCriteria,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Task>, DatabaseError> {
        let select = filter::apply(TaskSelect::all(), criteria)?
            .limit(limit)
            .offset(offset);
        self.fetch_tasks(&select).await
    }

    /// Tasks of one building matching every constraint in `criteria`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the building does not exist,
    /// otherwise as [`Self::filter_tasks`].
    pub async fn filter_building_tasks(
        &self,
        building_id: i64,
        criteria: &FilterCriteria,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Task>, DatabaseError> {
        self.get_building(building_id).await?;
        let select = filter::apply(TaskSelect::for_building(building_id), criteria)?
            .limit(limit)
            .offset(offset);
        self.fetch_tasks(&select).await
    }

    /// Run a prepared select.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn fetch_tasks(&self, select: &TaskSelect) -> Result<Vec<Task>, DatabaseError> {
        let sql = select.to_sql();
        tracing::debug!(%sql, "fetching tasks");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(select.params()))
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Number of tasks a select matches, ignoring its limit and offset.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_tasks(&self, select: &TaskSelect) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &select.to_count_sql(),
                libsql::params_from_iter(select.count_params()),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count)
            .map_err(|_| DatabaseError::InvalidState(format!("negative task count {count}")))
    }
}
