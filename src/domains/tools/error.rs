//! Tool-specific error types.

use thiserror::Error;

/// Errors raised while dispatching a tool call, before the tool itself runs.
///
/// Failures inside a tool are reported as error results, not as `ToolError`.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// JSON-RPC error code for this error.
    pub fn json_rpc_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => -32601,
            Self::InvalidArguments(_) => -32602,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_messages() {
        let err = ToolError::not_found("nope");
        assert_eq!(err.json_rpc_code(), -32601);
        assert_eq!(err.to_string(), "Tool not found: nope");

        let err = ToolError::invalid_arguments("missing field `workspaceId`");
        assert_eq!(err.json_rpc_code(), -32602);
        assert_eq!(err.to_string(), "Invalid arguments: missing field `workspaceId`");
    }
}
