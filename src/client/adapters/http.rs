//! HTTP gateway adapter over the task API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::client::ports::{TaskGateway, TaskGatewayError, TaskGatewayResult};
use crate::task::domain::Task;
use crate::wire::{CreateTaskPayload, ErrorPayload};

/// Request timeout for gateway calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Task gateway speaking the `/api/task` HTTP contract.
#[derive(Debug, Clone)]
pub struct HttpTaskGateway {
    endpoint: String,
    http: Client,
}

impl HttpTaskGateway {
    /// Creates a gateway for the store at `base_url`.
    ///
    /// `base_url` is the scheme-and-authority part of the store address,
    /// e.g. `http://127.0.0.1:5107`; a trailing slash is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Transport`] when the underlying HTTP
    /// client cannot be constructed.
    pub fn new(base_url: impl AsRef<str>) -> TaskGatewayResult<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TaskGatewayError::transport)?;
        let endpoint = format!("{}/api/task", base_url.as_ref().trim_end_matches('/'));
        Ok(Self { endpoint, http })
    }

    /// Decodes a successful response body, or maps the rejection.
    async fn decode<T>(response: Response) -> TaskGatewayResult<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(TaskGatewayError::transport)
    }

    /// Builds a rejection error, extracting the `{error}` body when present.
    async fn rejection(response: Response) -> TaskGatewayError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorPayload>()
            .await
            .ok()
            .map(|payload| payload.error);
        TaskGatewayError::Rejected { status, message }
    }
}

#[async_trait]
impl TaskGateway for HttpTaskGateway {
    async fn fetch_tasks(&self) -> TaskGatewayResult<Vec<Task>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching task list");
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(TaskGatewayError::transport)?;
        Self::decode(response).await
    }

    async fn create_task(&self, name: &str) -> TaskGatewayResult<Task> {
        tracing::debug!(endpoint = %self.endpoint, "submitting task");
        let payload = CreateTaskPayload {
            name: name.to_owned(),
        };
        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(TaskGatewayError::transport)?;
        Self::decode(response).await
    }
}
