//! Request executor for the Toggl Track API.
//!
//! Every tool reaches the upstream API through an [`ApiExecutor`]. The
//! production [`HttpExecutor`] performs exactly one HTTP call per invocation
//! and never retries: pacing is the caller's job.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, header};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::auth::basic_auth_header;
use super::error::TogglError;

/// Message returned in place of the (empty) body of a successful DELETE.
pub const DELETE_ACKNOWLEDGEMENT: &str = "Time entry deleted successfully";

/// Executes a single request against the upstream API.
#[async_trait]
pub trait ApiExecutor: Send + Sync {
    /// Send `method url` with an optional JSON body and return the JSON payload.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value, TogglError>;
}

/// Payload synthesized for successful deletions.
pub fn deletion_acknowledgement() -> Value {
    serde_json::json!({ "message": DELETE_ACKNOWLEDGEMENT })
}

/// Turn an upstream status and body into a JSON payload or an error.
///
/// DELETE responses carry no body, so their success payload is synthesized
/// and the body is never parsed. Any other empty 2xx body is an error rather
/// than a silent `null`.
///
/// `status_text` on failures is the canonical reason for the status code;
/// reqwest does not expose the phrase the upstream actually sent.
pub fn interpret_response(
    method: &Method,
    status: StatusCode,
    body: &str,
) -> Result<Value, TogglError> {
    if !status.is_success() {
        return Err(TogglError::upstream(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status"),
            Some(body.to_string()),
        ));
    }

    if *method == Method::DELETE {
        return Ok(deletion_acknowledgement());
    }

    if body.trim().is_empty() {
        return Err(TogglError::unexpected_response(format!(
            "empty body with status {}",
            status.as_u16()
        )));
    }

    serde_json::from_str(body)
        .map_err(|e| TogglError::unexpected_response(format!("invalid JSON payload: {}", e)))
}

/// reqwest-backed executor holding the API token.
pub struct HttpExecutor {
    client: Client,
    token: Option<String>,
}

impl HttpExecutor {
    /// Build an executor. A missing or blank token is accepted here and
    /// reported on every call instead.
    pub fn new(token: Option<String>, timeout: Duration) -> Result<Self, TogglError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TogglError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }
}

impl fmt::Debug for HttpExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpExecutor")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[async_trait]
impl ApiExecutor for HttpExecutor {
    #[instrument(skip(self, method, body), fields(method = %method))]
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value, TogglError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| TogglError::configuration("TOGGL_API_TOKEN is not set"))?;

        debug!("Sending {} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, basic_auth_header(token));

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TogglError::transport("Request timed out")
            } else if e.is_connect() {
                TogglError::transport(format!("Connection failed: {}", e))
            } else {
                TogglError::transport(e.to_string())
            }
        })?;

        let status = response.status();
        debug!("Received {} for {} {}", status, method, url);

        if status.is_success() && method == Method::DELETE {
            return Ok(deletion_acknowledgement());
        }

        let text = response
            .text()
            .await
            .map_err(|e| TogglError::transport(format!("Failed to read response body: {}", e)))?;

        let result = interpret_response(&method, status, &text);
        if let Err(e) = &result {
            warn!("{} {} failed: {}", method, url, e);
        }
        result
    }
}
