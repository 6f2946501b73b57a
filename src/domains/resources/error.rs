//! Errors raised while resolving a resource URI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    /// No template matches the requested URI.
    #[error("No resource template matches '{0}'")]
    NotFound(String),

    /// The URI matches a template but its parameter is unusable.
    #[error("Invalid resource URI '{0}'")]
    InvalidUri(String),
}

impl ResourceError {
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri(uri.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_quote_the_uri() {
        assert_eq!(
            ResourceError::not_found("toggl://x").to_string(),
            "No resource template matches 'toggl://x'"
        );
        assert_eq!(
            ResourceError::invalid_uri("greeting://").to_string(),
            "Invalid resource URI 'greeting://'"
        );
    }
}
