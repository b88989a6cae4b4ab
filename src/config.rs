//! Service Configuration
//!
//! Where the task service lives. Set `TASKS_API_URL` at build time to point
//! the UI somewhere other than the local development server.

use reqwest::Url;

use crate::error::ApiError;
use crate::models::TaskId;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and normalize a base URL (no trailing slash)
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        // Paths are appended to the base, so it must end in a path
        if parsed.cannot_be_a_base() || parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Build-time override, falling back to the default on a bad value
    pub fn from_build_env() -> Self {
        let configured = option_env!("TASKS_API_URL").unwrap_or(DEFAULT_BASE_URL);
        match Self::new(configured) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    target: "config",
                    error = %e,
                    fallback = DEFAULT_BASE_URL,
                    "bad TASKS_API_URL"
                );
                Self::default()
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    pub fn task_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
