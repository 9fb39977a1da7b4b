//! Wire-format payloads shared by the HTTP surface and the client gateway.
//!
//! Task records serialise directly from [`crate::task::domain::Task`]; this
//! module holds the two auxiliary payloads of the HTTP contract, defined
//! once so both ends stay in agreement.

use serde::{Deserialize, Serialize};

/// Request body for creating a task: `{"name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskPayload {
    /// Submitted task name, validated by the store.
    pub name: String,
}

/// Error body returned for rejected requests: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable failure message.
    pub error: String,
}
