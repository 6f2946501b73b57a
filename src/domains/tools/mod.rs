//! Tools domain module.
//!
//! Tools are the Toggl Track operations MCP clients can call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Tool listing and HTTP dispatch
//! - `error.rs` - Tool-level error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file under `definitions/` with params, `execute()` and `http_handler()`
//! 2. Export it from the group's `mod.rs`
//! 3. Add its route in `router.rs`
//! 4. Register it in `registry.rs` for HTTP support

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
