//! SQL implementation of the task filter seam.
//!
//! `TaskSelect` accumulates `WHERE` conditions whose column expressions are
//! fixed strings owned by this module; every caller-supplied value becomes a
//! numbered `?N` parameter. A status such as `Completed';DROP TABLE tasks--`
//! is therefore compared as a literal and simply matches nothing.

use libsql::Value;
use warden_core::filter::{TaskPredicate, TaskQuery};

use crate::helpers::format_datetime;

pub(crate) const TASK_COLUMNS: &str = "id, building_id, created_by, assigned_to, title, description, status, due_at, created_at, updated_at";

/// A parameterized `SELECT` over the `tasks` table.
#[derive(Debug, Clone, Default)]
pub struct TaskSelect {
    conditions: Vec<String>,
    params: Vec<Value>,
    limit: Option<u32>,
    offset: u32,
}

impl TaskSelect {
    /// Every task, across all buildings.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Tasks owned by one building.
    #[must_use]
    pub fn for_building(building_id: i64) -> Self {
        let mut select = Self::default();
        select.bind("building_id", "=", Value::Integer(building_id));
        select
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// The `SELECT` statement, newest tasks first.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks{} ORDER BY created_at DESC, id DESC",
            self.where_clause()
        );
        let next = self.params.len();
        match (self.limit, self.offset) {
            (Some(_), 0) => sql.push_str(&format!(" LIMIT ?{}", next + 1)),
            (Some(_), _) => sql.push_str(&format!(" LIMIT ?{} OFFSET ?{}", next + 1, next + 2)),
            (None, 0) => {}
            (None, _) => sql.push_str(&format!(" LIMIT -1 OFFSET ?{}", next + 1)),
        }
        sql
    }

    /// Parameters for [`Self::to_sql`], in placeholder order.
    #[must_use]
    pub fn params(&self) -> Vec<Value> {
        let mut params = self.params.clone();
        if let Some(limit) = self.limit {
            params.push(Value::Integer(i64::from(limit)));
        }
        if self.offset > 0 {
            params.push(Value::Integer(i64::from(self.offset)));
        }
        params
    }

    /// A `COUNT(*)` over the same conditions, ignoring limit and offset.
    #[must_use]
    pub fn to_count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM tasks{}", self.where_clause())
    }

    /// Parameters for [`Self::to_count_sql`].
    #[must_use]
    pub fn count_params(&self) -> Vec<Value> {
        self.params.clone()
    }

    fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    fn bind(&mut self, column: &'static str, op: &'static str, value: Value) {
        self.params.push(value);
        self.conditions
            .push(format!("{column} {op} ?{}", self.params.len()));
    }
}

impl TaskQuery for TaskSelect {
    fn with_predicate(mut self, predicate: &TaskPredicate) -> Self {
        match predicate {
            TaskPredicate::CreatedAtOrAfter(instant) => {
                self.bind("created_at", ">=", Value::Text(format_datetime(instant)));
            }
            TaskPredicate::CreatedAtOrBefore(instant) => {
                self.bind("created_at", "<=", Value::Text(format_datetime(instant)));
            }
            TaskPredicate::AssignedTo(user_id) => {
                self.bind("assigned_to", "=", Value::Integer(*user_id));
            }
            TaskPredicate::StatusIgnoreCase(status) => {
                self.bind("lower(status)", "=", Value::Text(status.clone()));
            }
        }
        self
    }
}
