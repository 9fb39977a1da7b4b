//! Gateway port for reaching the remote task store.

use crate::task::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task gateway operations.
pub type TaskGatewayResult<T> = Result<T, TaskGatewayError>;

/// Remote task store contract as seen from the client.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Fetches the full task list from the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError`] when the request fails or the store
    /// rejects it.
    async fn fetch_tasks(&self) -> TaskGatewayResult<Vec<Task>>;

    /// Submits a new task name and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError`] when the request fails or the store
    /// rejects the name.
    async fn create_task(&self, name: &str) -> TaskGatewayResult<Task>;
}

/// Errors returned by task gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskGatewayError {
    /// The request never completed or the response was unreadable.
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The store answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// Error message extracted from the response body, if any.
        message: Option<String>,
    },
}

impl TaskGatewayError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns the store-supplied failure message, when the store sent one.
    #[must_use]
    pub fn store_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Transport(_) => None,
        }
    }
}
