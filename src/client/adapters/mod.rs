//! Adapter implementations of task client ports.

pub mod http;

pub use http::HttpTaskGateway;
