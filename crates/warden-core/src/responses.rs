//! CLI response types returned as JSON by `wdn` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Comment, Task};

/// Response from `wdn task get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskDetailResponse {
    pub task: Task,
    pub comments: Vec<Comment>,
}

/// Response from `wdn building delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub entity: String,
    pub id: i64,
    pub deleted: bool,
}
