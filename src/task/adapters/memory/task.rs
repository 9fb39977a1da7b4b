//! In-memory task store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskName},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// The authoritative sequence lives behind a single lock; append holds the
/// write side across identifier assignment and insertion, which makes the
/// operation atomic with respect to concurrent callers. Contents do not
/// survive the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn append(&self, name: TaskName) -> TaskRepositoryResult<Task> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        let id = TaskId::next_after(tasks.iter().map(Task::id));
        let task = Task::new(id, name);
        tasks.push(task.clone());
        Ok(task)
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self
            .tasks
            .read()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(tasks.clone())
    }
}
