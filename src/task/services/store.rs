//! Service layer for task creation and retrieval.

use crate::task::{
    domain::{Task, TaskDomainError, TaskName},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskStoreError {
    /// Returns true when the error is a validation failure attributable to
    /// the caller's input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

/// Result type for task store service operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store orchestration service.
///
/// Exposes the two operations of the store: appending a validated task and
/// listing the accumulated records.
pub struct TaskStoreService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskStoreService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskStoreService<R>
where
    R: TaskRepository,
{
    /// Creates a new task store service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates the submitted name and appends a new record.
    ///
    /// Validation happens fully before any mutation: a rejected name leaves
    /// the store unchanged. On success the stored record, including its
    /// assigned identifier, is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the name is empty after
    /// trimming, or [`TaskStoreError::Repository`] when the append fails.
    pub async fn create(&self, name: impl Into<String> + Send) -> TaskStoreResult<Task> {
        let validated = TaskName::new(name)?;
        Ok(self.repository.append(validated).await?)
    }

    /// Returns the full current sequence of records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }
}
