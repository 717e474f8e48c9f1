//! Status enums for Warden.
//!
//! Task status is stored using its canonical display spelling (`"In Progress"`),
//! which is also the serde representation. Filtering matches statuses
//! case-insensitively; storage never does.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task.
///
/// The set is fixed. Any variant may be set directly on update; there is no
/// transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TaskStatus {
    #[serde(rename = "Open")]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Rejected")]
    Rejected,
}

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Completed, Self::Rejected];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        }
    }

    /// Parse a status ignoring ASCII case and surrounding whitespace.
    ///
    /// Accepts `in_progress` and `in-progress` as spellings of `In Progress`.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().to_lowercase() == normalized)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s).ok_or_else(|| {
            CoreError::Validation(format!(
                "unknown task status '{s}' (expected one of: Open, In Progress, Completed, Rejected)"
            ))
        })
    }
}
