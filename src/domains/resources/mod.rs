//! Resources domain module.
//!
//! Resources represent data that MCP clients can read. This server offers
//! parameterized resource templates only.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual template definitions (one file per template)
//! - `registry.rs` - Central template registration and URI dispatch
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource Template
//!
//! 1. Create a new file in `definitions/`
//! 2. Implement the `ResourceTemplateDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceTemplateDefinition;
pub use error::ResourceError;
pub use registry::{RenderedResource, get_all_resource_templates, render_uri};
pub use service::ResourceService;
