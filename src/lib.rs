//! Toggl Track MCP Server Library
//!
//! Exposes the Toggl Track time-tracking API as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and its transports
//! - **domains**: business logic organized by bounded contexts
//!   - **toggl**: API client, request models and the bulk creation orchestrator
//!   - **tools**: MCP tools wrapping the Toggl endpoints
//!   - **resources**: resource templates readable by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use toggl_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
