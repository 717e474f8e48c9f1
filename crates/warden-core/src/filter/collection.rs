//! In-memory task collection.

use crate::entities::Task;
use crate::filter::{TaskPredicate, TaskQuery};

/// A `Vec<Task>` that can be scoped and filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    #[must_use]
    pub fn new(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: tasks.into_iter().collect(),
        }
    }

    /// Keep only the tasks owned by `building_id`.
    #[must_use]
    pub fn in_building(mut self, building_id: i64) -> Self {
        self.tasks.retain(|task| task.building_id == building_id);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

impl TaskQuery for TaskCollection {
    fn with_predicate(mut self, predicate: &TaskPredicate) -> Self {
        self.tasks.retain(|task| predicate.matches(task));
        self
    }
}

impl FromIterator<Task> for TaskCollection {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self::new(iter)
    }
}
