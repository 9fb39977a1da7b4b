//! Command-line client for the task API.
//!
//! Usage:
//!
//! ```text
//! ticklist_cli list
//! ticklist_cli add <name>...
//! ```
//!
//! The store address is taken from the `TICKLIST_URL` environment variable
//! and defaults to `http://127.0.0.1:5107`. `add` joins its remaining
//! arguments into a single task name and prints the refreshed list after
//! the store confirms the append.

use std::env;
use std::sync::Arc;

use thiserror::Error;
use ticklist::client::adapters::HttpTaskGateway;
use ticklist::client::ports::TaskGateway;
use ticklist::client::services::TaskClient;
use ticklist::task::domain::Task;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the store base URL.
const URL_ENV: &str = "TICKLIST_URL";
/// Store address used when `TICKLIST_URL` is unset.
const DEFAULT_URL: &str = "http://127.0.0.1:5107";

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors reported by the command-line client.
#[derive(Debug, Error)]
enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("{0}")]
    Request(String),
}

/// Parsed command-line operation.
#[derive(Debug)]
enum Operation {
    List,
    Add(String),
}

impl Operation {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, CliError> {
        match args.next().as_deref() {
            Some("list") => Ok(Self::List),
            Some("add") => Ok(Self::Add(args.collect::<Vec<_>>().join(" "))),
            Some(other) => Err(CliError::InvalidArgs(format!(
                "unknown operation '{other}'; expected list or add"
            ))),
            None => Err(CliError::InvalidArgs(
                "missing operation; expected list or add".to_owned(),
            )),
        }
    }
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let operation = Operation::parse(env::args().skip(1))?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(operation)).map_err(Into::into)
}

/// Runs one operation against the configured store.
async fn run(operation: Operation) -> Result<(), CliError> {
    let base_url = env::var(URL_ENV).unwrap_or_else(|_| DEFAULT_URL.to_owned());
    let gateway =
        HttpTaskGateway::new(base_url).map_err(|err| CliError::Request(err.to_string()))?;
    let mut client = TaskClient::new(Arc::new(gateway));

    if let Operation::Add(name) = operation {
        client.set_pending_name(name);
        client.submit().await;
        check_settled(&client)?;
    }

    client.load().await;
    check_settled(&client)?;
    print_tasks(client.tasks());
    Ok(())
}

/// Converts a surfaced client error into a command failure.
fn check_settled<G>(client: &TaskClient<G>) -> Result<(), CliError>
where
    G: TaskGateway,
{
    client.last_error().map_or(Ok(()), |message| {
        Err(CliError::Request(message.to_owned()))
    })
}

/// Prints records as `#<id> <name>` with a trailing count line.
#[expect(
    clippy::print_stdout,
    reason = "printing the list is the command's purpose"
)]
fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks yet.");
        return;
    }

    for task in tasks {
        println!("#{} {}", task.id(), task.name());
    }
    let label = if tasks.len() == 1 { "task" } else { "tasks" };
    println!("{} {label}", tasks.len());
}
