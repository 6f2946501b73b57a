//! Domains module containing business logic organized by bounded contexts.
//!
//! - `toggl`: typed access to the Toggl Track v9 API
//! - `tools`: MCP tool definitions built on `toggl`
//! - `resources`: MCP resource templates

pub mod resources;
pub mod toggl;
pub mod tools;
