//! Serves the task API over HTTP.
//!
//! Usage:
//!
//! ```text
//! ticklist_server
//! ```
//!
//! The bind address is taken from the `TICKLIST_ADDR` environment variable
//! and defaults to `127.0.0.1:5107`. The store is in-memory only:
//! restarting the process empties the list. Log verbosity follows
//! `RUST_LOG`.

use std::env;
use std::sync::Arc;

use ticklist::api;
use ticklist::task::adapters::memory::InMemoryTaskRepository;
use ticklist::task::services::TaskStoreService;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the socket address to bind.
const ADDR_ENV: &str = "TICKLIST_ADDR";
/// Bind address used when `TICKLIST_ADDR` is unset.
const DEFAULT_ADDR: &str = "127.0.0.1:5107";

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve())
}

/// Binds the listener and runs the API until the process is stopped.
async fn serve() -> Result<(), BoxError> {
    let addr = env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
    let repository = Arc::new(InMemoryTaskRepository::new());
    let app = api::router(TaskStoreService::new(repository));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "task API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
