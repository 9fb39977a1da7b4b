//! Repository port for task storage and retrieval.

use crate::task::domain::{Task, TaskName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Identifier assignment belongs to the repository: [`TaskRepository::append`]
/// must run as a single atomic unit, so two concurrent appends can neither
/// observe the same current maximum identifier nor drop one of the two
/// records.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Appends a record under a newly assigned identifier and returns the
    /// stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Storage`] when the underlying store is
    /// unavailable.
    async fn append(&self, name: TaskName) -> TaskRepositoryResult<Task>;

    /// Returns every stored record in insertion order.
    ///
    /// The result is a consistent snapshot: it reflects either the pre- or
    /// post-state of any in-flight append, never a partially appended record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Storage`] when the underlying store is
    /// unavailable.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
