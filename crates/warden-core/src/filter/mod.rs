//! Conjunctive task filtering.
//!
//! [`FilterCriteria`] is translated into an immutable list of
//! [`TaskPredicate`] descriptors, which are then folded onto any
//! [`TaskQuery`] implementation: the in-memory [`TaskCollection`] here, or the
//! SQL select builder in `warden-db`. A bad date or timezone fails before the
//! query is touched.

mod collection;
mod criteria;

pub use collection::TaskCollection;
pub use criteria::{FilterCriteria, FilterCriteriaBuilder};

use chrono::{DateTime, Utc};

use crate::entities::Task;
use crate::errors::CoreError;

/// A single constraint on a task. All predicates of a filter are ANDed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskPredicate {
    /// `created_at >= instant`
    CreatedAtOrAfter(DateTime<Utc>),
    /// `created_at <= instant`
    CreatedAtOrBefore(DateTime<Utc>),
    /// `assigned_to = user id`; unassigned tasks never match.
    AssignedTo(i64),
    /// Lowercased status compared to the lowercased stored status. The value
    /// is always a literal, never part of a query text.
    StatusIgnoreCase(String),
}

impl TaskPredicate {
    /// Evaluate the predicate against a task in memory.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::CreatedAtOrAfter(instant) => task.created_at >= *instant,
            Self::CreatedAtOrBefore(instant) => task.created_at <= *instant,
            Self::AssignedTo(user_id) => task.assigned_to == Some(*user_id),
            Self::StatusIgnoreCase(status) => task.status.as_str().to_lowercase() == *status,
        }
    }
}

/// A queryable collection of tasks that accepts predicates.
///
/// Implementations are scoped (e.g. to one building) when constructed, and
/// yield their records however suits the backend.
pub trait TaskQuery: Sized {
    /// Narrow the query by one more predicate.
    #[must_use]
    fn with_predicate(self, predicate: &TaskPredicate) -> Self;
}

/// Apply every constraint in `criteria` to `query`.
///
/// Empty criteria return `query` unchanged.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTimezone`] or [`CoreError::InvalidDate`] when a
/// date boundary cannot be resolved. `query` is consumed and not returned.
pub fn apply<Q: TaskQuery>(query: Q, criteria: &FilterCriteria) -> Result<Q, CoreError> {
    let predicates = criteria.predicates()?;
    tracing::debug!(predicates = predicates.len(), "applying task filter");
    Ok(predicates.iter().fold(query, Q::with_predicate))
}
