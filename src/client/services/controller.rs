//! Task client controller: local mirror, pending input, and submit flow.

use std::sync::Arc;

use crate::client::domain::Activity;
use crate::client::ports::{TaskGateway, TaskGatewayError};
use crate::task::domain::Task;

/// Message surfaced when submit is attempted with a blank name.
const EMPTY_NAME_MESSAGE: &str = "Task name cannot be empty";
/// Fallback message for a failed list fetch.
const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch tasks";
/// Fallback message for a failed submission.
const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to add task";

/// Client-side view of the task list.
///
/// Holds the local mirror of the store, the in-progress task name, and the
/// activity state of the current action. The mirror is never the source of
/// truth: [`TaskClient::load`] replaces it wholesale and
/// [`TaskClient::submit`] appends the confirmed record.
pub struct TaskClient<G>
where
    G: TaskGateway,
{
    gateway: Arc<G>,
    tasks: Vec<Task>,
    pending_name: String,
    activity: Activity,
}

impl<G> TaskClient<G>
where
    G: TaskGateway,
{
    /// Creates a client with an empty mirror.
    #[must_use]
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            tasks: Vec::new(),
            pending_name: String::new(),
            activity: Activity::Idle,
        }
    }

    /// Replaces the local mirror with the store's current list.
    ///
    /// On failure the previous mirror is kept and a user-facing message is
    /// surfaced through [`TaskClient::last_error`]; starting the request
    /// clears any earlier failure.
    pub async fn load(&mut self) {
        self.activity = Activity::Busy;
        match self.gateway.fetch_tasks().await {
            Ok(tasks) => {
                self.tasks = tasks;
                self.activity = Activity::Idle;
            }
            Err(err) => {
                self.activity = Activity::Failed(fetch_message(&err));
            }
        }
    }

    /// Submits the pending name as a new task.
    ///
    /// No request is issued while another one is in flight, or when the
    /// trimmed pending name is empty (that failure is surfaced locally).
    /// On success the stored record is appended to the mirror and the
    /// pending name is cleared; on failure both are left untouched so the
    /// typed text is not lost.
    pub async fn submit(&mut self) {
        if self.activity.is_busy() {
            return;
        }

        let name = self.pending_name.trim().to_owned();
        if name.is_empty() {
            self.activity = Activity::Failed(EMPTY_NAME_MESSAGE.to_owned());
            return;
        }

        self.activity = Activity::Busy;
        match self.gateway.create_task(&name).await {
            Ok(task) => {
                self.tasks.push(task);
                self.pending_name.clear();
                self.activity = Activity::Idle;
            }
            Err(err) => {
                self.activity = Activity::Failed(submit_message(&err));
            }
        }
    }

    /// Replaces the in-progress task name.
    pub fn set_pending_name(&mut self, value: impl Into<String>) {
        self.pending_name = value.into();
    }

    /// Returns the in-progress task name.
    #[must_use]
    pub fn pending_name(&self) -> &str {
        &self.pending_name
    }

    /// Returns the local mirror of the task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns true while a request is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.activity.is_busy()
    }

    /// Returns the failure message of the last settled action, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.activity.error()
    }

    /// Returns true when the submit control should be enabled: no request
    /// in flight and a non-blank pending name.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.pending_name.trim().is_empty()
    }
}

/// User-facing message for a failed fetch.
fn fetch_message(err: &TaskGatewayError) -> String {
    err.store_message()
        .map_or_else(|| FETCH_FALLBACK_MESSAGE.to_owned(), ToOwned::to_owned)
}

/// User-facing message for a failed submission.
fn submit_message(err: &TaskGatewayError) -> String {
    err.store_message()
        .map_or_else(|| SUBMIT_FALLBACK_MESSAGE.to_owned(), ToOwned::to_owned)
}
