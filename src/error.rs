//! Error Types
//!
//! Failures of the task service calls, kept `Clone` so they can live in state.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("invalid service url: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Which remote operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Load => "load tasks",
            Operation::Create => "add task",
            Operation::Update => "update task",
            Operation::Delete => "delete task",
        })
    }
}

/// A failed operation as surfaced to the view
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not {operation}: {error}")]
pub struct SyncError {
    pub operation: Operation,
    #[source]
    pub error: ApiError,
}

impl SyncError {
    pub fn new(operation: Operation, error: ApiError) -> Self {
        Self { operation, error }
    }

    /// Load failures can be retried by fetching again
    pub fn is_retryable(&self) -> bool {
        self.operation == Operation::Load
    }
}
