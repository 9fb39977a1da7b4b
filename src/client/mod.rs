//! Task client: a local mirror of the store behind a remote gateway.
//!
//! The client half of the system keeps a read-through copy of the task
//! list, submits new tasks, and exposes busy and error states for an
//! interaction layer to render. The module follows the same hexagonal
//! layout as [`crate::task`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
