//! Transport error types.

use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

/// Failures that stop a transport before or while it serves requests.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The rmcp service could not complete its handshake.
    #[error("MCP handshake failed: {0}")]
    Handshake(String),

    /// The rmcp service stopped with an error after the handshake.
    #[error("MCP session ended with an error: {0}")]
    Session(String),

    #[error("HTTP server error: {0}")]
    Http(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn handshake(err: impl std::fmt::Display) -> Self {
        Self::Handshake(err.to_string())
    }

    pub fn session(err: impl std::fmt::Display) -> Self {
        Self::Session(err.to_string())
    }

    pub fn http(err: impl std::fmt::Display) -> Self {
        Self::Http(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_message() {
        let err = TransportError::bind(
            "127.0.0.1:80",
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        );
        assert_eq!(err.to_string(), "Failed to bind to 127.0.0.1:80: in use");

        let core: crate::core::Error = err.into();
        assert!(core.to_string().starts_with("Transport error: "));
    }

    #[test]
    fn test_handshake_keeps_cause() {
        let err = TransportError::handshake("connection closed: initialize request");
        assert_eq!(
            err.to_string(),
            "MCP handshake failed: connection closed: initialize request"
        );
    }
}
