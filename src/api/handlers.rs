//! HTTP handlers for the task API.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use super::error::ApiError;
use crate::task::domain::Task;
use crate::task::ports::TaskRepository;
use crate::task::services::TaskStoreService;
use crate::wire::CreateTaskPayload;

/// Returns every stored task in insertion order.
///
/// # Errors
///
/// Returns [`ApiError`] when the store lookup fails.
pub async fn list_tasks<R>(
    State(service): State<TaskStoreService<R>>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository + 'static,
{
    let tasks = service.list().await.map_err(|err| {
        tracing::error!(error = %err, "task list lookup failed");
        ApiError::from(err)
    })?;
    Ok(Json(tasks))
}

/// Creates a task from the submitted name.
///
/// Responds `201 Created` with the stored record, or `400 Bad Request`
/// with an `{error}` body when the name is empty after trimming.
///
/// # Errors
///
/// Returns [`ApiError`] when validation rejects the name or the append
/// fails.
pub async fn create_task<R>(
    State(service): State<TaskStoreService<R>>,
    Json(payload): Json<CreateTaskPayload>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    R: TaskRepository + 'static,
{
    let task = service.create(payload.name).await.map_err(|err| {
        tracing::debug!(error = %err, "task creation rejected");
        ApiError::from(err)
    })?;
    tracing::info!(id = %task.id(), "task created");
    Ok((StatusCode::CREATED, Json(task)))
}
