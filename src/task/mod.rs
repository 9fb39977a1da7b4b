//! Task store: the authoritative ordered collection of tasks.
//!
//! This module implements the server-resident half of the system: creating
//! validated task records under monotonically assigned identifiers and
//! listing the accumulated sequence. The module follows hexagonal
//! architecture:
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
