//! Resource definitions module.
//!
//! Each resource template is defined in its own file with:
//! - URI template and metadata
//! - A renderer for the template parameter
//!
//! ## Adding a New Resource Template
//!
//! 1. Create a new file (e.g., `my_template.rs`)
//! 2. Implement the `ResourceTemplateDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod greeting;

pub use greeting::GreetingResource;

use super::error::ResourceError;

/// Trait for parameterized resource definitions.
///
/// A template matches every URI starting with `URI_PREFIX`; the rest of the
/// URI is handed to `render`.
pub trait ResourceTemplateDefinition {
    /// RFC 6570 URI template advertised to clients.
    const URI_TEMPLATE: &'static str;

    /// Literal prefix of every URI this template matches.
    const URI_PREFIX: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A human-readable title.
    const TITLE: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the rendered content.
    const MIME_TYPE: &'static str;

    /// Render the content for the template parameter.
    fn render(parameter: &str) -> Result<String, ResourceError>;

    /// Extract the template parameter from `uri`, if it matches.
    fn parameter(uri: &str) -> Option<&str> {
        uri.strip_prefix(Self::URI_PREFIX)
    }
}
