//! Server plumbing shared by every transport.
//!
//! [`Config`] is read once from the environment, [`McpServer`] owns the Toggl
//! API handle and the tool router, and [`TransportService`] runs it.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
