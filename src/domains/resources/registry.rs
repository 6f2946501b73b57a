//! Resource Registry - central registration of all resource templates.
//!
//! When adding a new template:
//! 1. Create the definition file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resource_templates()` and `render_uri()`

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};

use super::definitions::{GreetingResource, ResourceTemplateDefinition};
use super::error::ResourceError;

/// Build the advertised template for a definition.
fn build_template<T: ResourceTemplateDefinition>() -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: T::URI_TEMPLATE.to_string(),
        name: T::NAME.to_string(),
        title: Some(T::TITLE.to_string()),
        description: Some(T::DESCRIPTION.to_string()),
        mime_type: Some(T::MIME_TYPE.to_string()),
    }
    .no_annotation()
}

fn try_render<T: ResourceTemplateDefinition>(
    uri: &str,
) -> Option<Result<RenderedResource, ResourceError>> {
    let parameter = T::parameter(uri)?;
    Some(T::render(parameter).map(|text| RenderedResource {
        text,
        mime_type: T::MIME_TYPE,
    }))
}

/// Text produced by a template for a concrete URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResource {
    pub text: String,
    pub mime_type: &'static str,
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![build_template::<GreetingResource>()]
}

/// Render a concrete URI with the first template that matches it.
pub fn render_uri(uri: &str) -> Result<RenderedResource, ResourceError> {
    try_render::<GreetingResource>(uri).unwrap_or_else(|| Err(ResourceError::not_found(uri)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, "greeting://{name}");
        assert_eq!(templates[0].raw.mime_type.as_deref(), Some("text/plain"));
    }

    #[test]
    fn test_render_uri() {
        let rendered = render_uri("greeting://World").unwrap();
        assert_eq!(rendered.text, "Hello, World!");
        assert_eq!(rendered.mime_type, "text/plain");

        assert!(matches!(
            render_uri("mcp://server/info"),
            Err(ResourceError::NotFound(_))
        ));
    }
}
