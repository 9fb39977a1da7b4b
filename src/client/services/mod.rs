//! Orchestration services for the task client.

mod controller;

pub use controller::TaskClient;
