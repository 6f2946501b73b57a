//! URL building and typed helpers on top of an [`ApiExecutor`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::client::{ApiExecutor, HttpExecutor};
use super::error::TogglError;
use crate::core::config::Config;

/// Default upstream base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.track.toggl.com/api/v9";

/// Handle to the Toggl Track API shared by every tool.
#[derive(Clone)]
pub struct TogglApi {
    base_url: String,
    created_with: String,
    executor: Arc<dyn ApiExecutor>,
}

impl TogglApi {
    /// Create a handle for `base_url` backed by `executor`.
    pub fn new(base_url: impl Into<String>, executor: Arc<dyn ApiExecutor>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            created_with: env!("CARGO_PKG_NAME").replace('_', "-"),
            executor,
        }
    }

    /// Set the `created_with` value stamped on new time entries.
    pub fn with_created_with(mut self, created_with: impl Into<String>) -> Self {
        self.created_with = created_with.into();
        self
    }

    /// Build the production handle from configuration.
    pub fn from_config(config: &Config) -> Result<Self, TogglError> {
        let executor = HttpExecutor::new(
            config.credentials.toggl_api_token.clone(),
            Duration::from_secs(config.api.request_timeout_secs),
        )?;

        Ok(Self::new(config.api.base_url.clone(), Arc::new(executor))
            .with_created_with(config.api.created_with.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn created_with(&self) -> &str {
        &self.created_with
    }

    /// Absolute URL for an API path such as `/workspaces`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Absolute URL with an encoded query; no `?` is added for an empty query.
    pub fn url_with_query<Q: Serialize>(&self, path: &str, query: &Q) -> Result<String, TogglError> {
        let encoded = serde_urlencoded::to_string(query)
            .map_err(|e| TogglError::validation(format!("Invalid query parameters: {}", e)))?;

        if encoded.is_empty() {
            Ok(self.url(path))
        } else {
            Ok(format!("{}?{}", self.url(path), encoded))
        }
    }

    /// Send a request, serializing `body` to JSON first.
    pub async fn send<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Value, TogglError> {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| TogglError::validation(format!("Failed to encode request body: {}", e)))?;

        self.executor.execute(method, url, body.as_ref()).await
    }

    pub async fn get(&self, url: &str) -> Result<Value, TogglError> {
        self.executor.execute(Method::GET, url, None).await
    }

    pub async fn post<B: Serialize>(&self, url: &str, body: &B) -> Result<Value, TogglError> {
        self.send(Method::POST, url, Some(body)).await
    }

    pub async fn put<B: Serialize>(&self, url: &str, body: &B) -> Result<Value, TogglError> {
        self.send(Method::PUT, url, Some(body)).await
    }

    pub async fn patch<B: Serialize>(&self, url: &str, body: Option<&B>) -> Result<Value, TogglError> {
        self.send(Method::PATCH, url, body).await
    }

    pub async fn delete(&self, url: &str) -> Result<Value, TogglError> {
        self.executor.execute(Method::DELETE, url, None).await
    }

    /// List every project of a workspace as raw JSON objects.
    pub async fn list_projects(&self, workspace_id: u64) -> Result<Vec<Value>, TogglError> {
        let url = self.url(&format!("/workspaces/{}/projects", workspace_id));
        match self.get(&url).await? {
            Value::Array(projects) => Ok(projects),
            Value::Null => Ok(Vec::new()),
            other => Err(TogglError::unexpected_response(format!(
                "expected a project list for workspace {}, got {}",
                workspace_id,
                json_kind(&other)
            ))),
        }
    }
}

impl fmt::Debug for TogglApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogglApi")
            .field("base_url", &self.base_url)
            .field("created_with", &self.created_with)
            .finish_non_exhaustive()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
