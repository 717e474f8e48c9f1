//! Filter criteria value and its builder.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;
use crate::filter::TaskPredicate;
use crate::timezone::{end_of_day_utc, start_of_day_utc};

/// Optional task filter dimensions. `None` imposes no constraint.
///
/// Values are expected to have passed request validation already; the filter
/// still fails safely when they have not. Exactly empty strings deserialize as
/// `None`; whitespace-only values are kept and simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Local calendar date (`YYYY-MM-DD`), inclusive lower bound on `created_at`.
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub created_from: Option<String>,
    /// Local calendar date (`YYYY-MM-DD`), inclusive upper bound on `created_at`.
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub created_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    /// Compared case-insensitively against the stored status.
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// IANA zone the calendar dates are expressed in. Defaults to UTC.
    #[serde(deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl FilterCriteria {
    #[must_use]
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::new()
    }

    /// Whether no dimension is constrained.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.created_from.is_none()
            && self.created_to.is_none()
            && self.assigned_to.is_none()
            && self.status.is_none()
    }

    /// Translate the criteria into predicate descriptors.
    ///
    /// Order: `created_from`, `created_to`, `assigned_to`, `status`. The
    /// timezone is only consulted when a date is present.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTimezone`] or [`CoreError::InvalidDate`] from
    /// the first date that fails to resolve. No predicates are returned then.
    pub fn predicates(&self) -> Result<Vec<TaskPredicate>, CoreError> {
        let timezone = self.timezone.as_deref();
        let mut predicates = Vec::with_capacity(4);

        if let Some(from) = self.created_from.as_deref() {
            predicates.push(TaskPredicate::CreatedAtOrAfter(start_of_day_utc(
                from, timezone,
            )?));
        }
        if let Some(to) = self.created_to.as_deref() {
            predicates.push(TaskPredicate::CreatedAtOrBefore(end_of_day_utc(
                to, timezone,
            )?));
        }
        if let Some(user_id) = self.assigned_to {
            predicates.push(TaskPredicate::AssignedTo(user_id));
        }
        if let Some(status) = self.status.as_deref() {
            predicates.push(TaskPredicate::StatusIgnoreCase(status.to_lowercase()));
        }

        Ok(predicates)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Builds a [`FilterCriteria`] one dimension at a time.
#[derive(Debug, Default)]
pub struct FilterCriteriaBuilder(FilterCriteria);

impl FilterCriteriaBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn created_from(mut self, date: impl Into<String>) -> Self {
        self.0.created_from = Some(date.into());
        self
    }

    #[must_use]
    pub fn created_to(mut self, date: impl Into<String>) -> Self {
        self.0.created_to = Some(date.into());
        self
    }

    #[must_use]
    pub fn assigned_to(mut self, user_id: i64) -> Self {
        self.0.assigned_to = Some(user_id);
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.0.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.0.timezone = Some(timezone.into());
        self
    }

    #[must_use]
    pub fn build(self) -> FilterCriteria {
        self.0
    }
}
