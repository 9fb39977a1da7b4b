//! Task record type.

use super::{TaskId, TaskName};
use serde::{Deserialize, Serialize};

/// Immutable task record held by the store.
///
/// Records are created only by the store's append operation and never
/// mutated afterwards. The serialised shape is exactly
/// `{id: integer, name: string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
}

impl Task {
    /// Creates a record from an assigned identifier and validated name.
    #[must_use]
    pub const fn new(id: TaskId, name: TaskName) -> Self {
        Self { id, name }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }
}
