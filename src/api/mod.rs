//! Task Service Client
//!
//! HTTP bindings to the remote task service, organized by resource.

mod tasks;

use reqwest::{Client, RequestBuilder, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Handle to the task service
#[derive(Debug, Clone)]
pub struct TaskClient {
    http: Client,
    config: ApiConfig,
}

impl TaskClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Send a request and reject non-success statuses
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }
}
