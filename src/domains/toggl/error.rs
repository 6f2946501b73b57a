//! Errors raised while talking to the Toggl Track API.

use thiserror::Error;

/// Maximum number of characters of an upstream error body kept in messages.
const MAX_BODY_CHARS: usize = 500;

/// Errors that can occur while validating a request or calling the upstream API.
///
/// Every variant flattens into a single human-readable message; tool handlers
/// never expose the structured fields to clients.
#[derive(Debug, Error)]
pub enum TogglError {
    /// The API token is not configured.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input failed validation before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A name-based lookup found nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The HTTP request could not be completed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The upstream API answered with a non-2xx status.
    #[error("API error: {status} {status_text}{}", format_body(.body))]
    Upstream {
        status: u16,
        status_text: String,
        body: Option<String>,
    },

    /// The upstream API answered 2xx with a payload we cannot use.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl TogglError {
    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new "not found" error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new upstream error, dropping blank bodies.
    pub fn upstream(status: u16, status_text: impl Into<String>, body: Option<String>) -> Self {
        Self::Upstream {
            status,
            status_text: status_text.into(),
            body: body.filter(|b| !b.trim().is_empty()),
        }
    }

    /// Create a new unexpected-response error.
    pub fn unexpected_response(msg: impl Into<String>) -> Self {
        Self::UnexpectedResponse(msg.into())
    }
}

fn format_body(body: &Option<String>) -> String {
    match body {
        Some(body) if body.chars().count() > MAX_BODY_CHARS => {
            let head: String = body.chars().take(MAX_BODY_CHARS).collect();
            format!(" - {}...", head.trim())
        }
        Some(body) => format!(" - {}", body.trim()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_includes_status_and_body() {
        let err = TogglError::upstream(
            403,
            "Forbidden",
            Some("Incorrect username and/or password\n".into()),
        );
        assert_eq!(
            err.to_string(),
            "API error: 403 Forbidden - Incorrect username and/or password"
        );
    }

    #[test]
    fn test_upstream_blank_body_is_dropped() {
        let err = TogglError::upstream(500, "Internal Server Error", Some("   ".into()));
        assert_eq!(err.to_string(), "API error: 500 Internal Server Error");
    }

    #[test]
    fn test_upstream_long_body_is_truncated() {
        let err = TogglError::upstream(400, "Bad Request", Some("x".repeat(2000)));
        let msg = err.to_string();
        assert!(msg.ends_with("..."));
        assert!(msg.len() < 600);
    }

    #[test]
    fn test_not_found_message() {
        let err = TogglError::not_found("project 'Alpha' in workspace 42");
        assert_eq!(err.to_string(), "Not found: project 'Alpha' in workspace 42");
    }
}
