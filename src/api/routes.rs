//! Router construction for the task API.

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{create_task, list_tasks};
use crate::task::ports::TaskRepository;
use crate::task::services::TaskStoreService;

/// Builds the task API router.
///
/// Routes `GET /api/task` and `POST /api/task` onto the given service. The
/// page consuming the API is served from a different origin, so the router
/// answers cross-origin requests without restriction, matching the
/// unauthenticated surface.
#[must_use]
pub fn router<R>(service: TaskStoreService<R>) -> Router
where
    R: TaskRepository + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/task", get(list_tasks::<R>).post(create_task::<R>))
        .layer(cors)
        .with_state(service)
}
