//! STDIO transport: one MCP session over stdin/stdout.
//!
//! stdout carries protocol frames only, which is why `main` sends logs to stderr.

use rmcp::ServiceExt;
use tracing::{info, warn};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single client until it closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        if !server.has_token() {
            warn!("No TOGGL_API_TOKEN configured; tool calls will return errors");
        }

        let base_url = server.api().base_url().to_string();
        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(TransportError::handshake)?;

        info!("Client connected over stdio (Toggl API at {})", base_url);

        let reason = session.waiting().await.map_err(TransportError::session)?;
        info!("stdio session closed: {:?}", reason);
        Ok(())
    }
}
