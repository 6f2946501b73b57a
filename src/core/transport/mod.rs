//! Transports that carry MCP traffic to the Toggl server handler.
//!
//! `MCP_TRANSPORT` picks one at startup. Only the transports enabled as cargo
//! features are compiled:
//! - `stdio` (default): a single session over stdin/stdout
//! - `tcp`: one rmcp session per accepted socket
//! - `http`: plain JSON-RPC over POST, served by axum

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
